use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("State not registered: {name}")]
    NotRegistered { name: &'static str },
}

impl StateError {
    pub fn not_registered<T>() -> Self {
        Self::NotRegistered {
            name: std::any::type_name::<T>(),
        }
    }
}
