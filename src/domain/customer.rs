/// A guest placing a booking. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Customer {
    name: String,
    phone: String,
    email: Option<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Customer { name: name.into(), phone: phone.into(), email: None }
    }

    pub fn with_email(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Customer { name: name.into(), phone: phone.into(), email: Some(email.into()) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }
}
