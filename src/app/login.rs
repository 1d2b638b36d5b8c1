/// State behind the login screen: the form's username and the last error
/// line, if any.
#[derive(Debug, Default)]
pub struct LoginModel {
    pub username: String,
    pub error: Option<String>,
}

impl LoginModel {
    pub fn submitted(&mut self, username: &str) {
        self.username = username.to_string();
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn reset(&mut self) {
        self.username.clear();
        self.error = None;
    }
}
