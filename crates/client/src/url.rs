//! URL building for API requests.

use url::form_urlencoded;

/// Ordered query parameters for a request.
///
/// `None` values are dropped and list values encode as repeated keys
/// (`estado=a&estado=b`), never comma-joined.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a single parameter.
    pub fn push(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.entries.push((key.into(), value.to_string()));
        self
    }

    /// Append a parameter when the value is present.
    pub fn push_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.entries.push((key.into(), value.to_string()));
        }
        self
    }

    /// Append one parameter per value under the same key.
    pub fn push_all<V: ToString>(
        mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let key = key.into();
        for value in values {
            self.entries.push((key.clone(), value.to_string()));
        }
        self
    }

    /// Percent-encode the parameters as a query string, without the `?`.
    fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Build the absolute URL for a request.
///
/// Absolute `http://`/`https://` paths pass through unmodified apart from
/// merging `params` onto their existing query string. Relative paths join
/// the base URL with exactly one slash between them, regardless of how
/// many slashes the base or the path carry at the seam.
pub fn build_url(base: &str, path: &str, params: &QueryParams) -> String {
    let mut url = if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    };

    if !params.is_empty() {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&params.encode());
    }

    url
}
