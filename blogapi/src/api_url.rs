use std::env;

#[derive(Debug, Clone)]
pub struct ApiUrl(String);

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ApiUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Creates a new ApiUrl from the environment variable `BLOG_API_URL`.
    pub fn from_env() -> Self {
        Self(env::var("BLOG_API_URL").expect("BLOG_API_URL must be set in env"))
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_path_normalizes_slashes() {
        let url = ApiUrl::new("http://localhost:8000/");
        assert_eq!(
            url.append_path("/api/articles/search").as_ref(),
            "http://localhost:8000/api/articles/search"
        );
        assert_eq!(
            url.append_path("api/articles/categories").as_ref(),
            "http://localhost:8000/api/articles/categories"
        );
    }
}
