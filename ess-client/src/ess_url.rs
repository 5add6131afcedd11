use url::Url;

#[derive(Debug, Clone)]
pub struct EssURL(String);

impl AsRef<str> for EssURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl EssURL {
    /// Validates `base` as an absolute URL. Any path on the base is kept, so
    /// `http://host/api` + `/ess/update` becomes `http://host/api/ess/update`.
    pub fn parse(base: &str) -> Result<Self, url::ParseError> {
        let trimmed = base.trim().trim_end_matches('/');
        Url::parse(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", self.0, trimmed_path))
    }
}
