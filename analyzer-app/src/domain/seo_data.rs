#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoData {
    pub h1: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SeoData {
    pub fn with_h1(mut self, h1: Option<String>) -> Self {
        self.h1 = h1;
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.h1.is_none() && self.title.is_none() && self.description.is_none()
    }
}
