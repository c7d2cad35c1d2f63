use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Tree of {requested} nodes exceeds the limit of {limit} nodes")]
    TooLarge { requested: usize, limit: usize },

    #[error("Tree of depth {requested} exceeds the depth limit of {limit}")]
    TooDeep { requested: usize, limit: usize },

    #[error("Size of {shape} tree does not fit into usize")]
    SizeOverflow { shape: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
