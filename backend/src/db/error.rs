//! Error types for dataset loading and configuration.
//!
//! Every error carries an [`ErrorContext`] describing where it happened so that
//! startup failures point at the offending file and operation.

use std::fmt;
use std::path::Path;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Structured context for dataset errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "load_dataset", "read_config")
    pub operation: Option<String>,
    /// File involved, if any
    pub path: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().display().to_string());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref path) = self.path {
            parts.push(format!("path={}", path));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for dataset operations
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset or config file could not be read.
    #[error("I/O error: {message} {context}")]
    Io {
        message: String,
        context: ErrorContext,
    },

    /// The file is not valid delimited text.
    #[error("CSV error: {message} {context}")]
    Csv {
        message: String,
        context: ErrorContext,
    },

    /// A data row failed to parse or validate. `row` is 1-based, header excluded.
    #[error("Invalid record at row {row}: {message} {context}")]
    InvalidRecord {
        row: usize,
        message: String,
        context: ErrorContext,
    },

    /// A required column is absent from the header.
    #[error("Missing column '{column}' {context}")]
    MissingColumn {
        column: String,
        context: ErrorContext,
    },

    /// The file has a header but no rows, so payload bounds are undefined.
    #[error("Dataset contains no records {context}")]
    Empty { context: ErrorContext },

    /// Configuration file or environment override is invalid.
    #[error("Configuration error: {message} {context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// The process-wide dataset was accessed before `init_dataset`.
    #[error("Dataset not initialized: {message}")]
    NotInitialized { message: String },
}

impl DatasetError {
    pub fn io(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Io {
            message: message.into(),
            context,
        }
    }

    pub fn csv(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Csv {
            message: message.into(),
            context,
        }
    }

    pub fn invalid_record(row: usize, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            row,
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn empty() -> Self {
        Self::Empty {
            context: ErrorContext::default(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn configuration_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Configuration {
            message: message.into(),
            context,
        }
    }

    /// Get the error context, if the variant carries one.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Io { context, .. }
            | Self::Csv { context, .. }
            | Self::InvalidRecord { context, .. }
            | Self::MissingColumn { context, .. }
            | Self::Empty { context }
            | Self::Configuration { context, .. } => Some(context),
            Self::NotInitialized { .. } => None,
        }
    }

    fn context_mut(&mut self) -> Option<&mut ErrorContext> {
        match self {
            Self::Io { context, .. }
            | Self::Csv { context, .. }
            | Self::InvalidRecord { context, .. }
            | Self::MissingColumn { context, .. }
            | Self::Empty { context }
            | Self::Configuration { context, .. } => Some(context),
            Self::NotInitialized { .. } => None,
        }
    }

    /// Add or update the operation in the error context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        if let Some(context) = self.context_mut() {
            context.operation = Some(operation.into());
        }
        self
    }

    /// Add or update the file path in the error context.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        if let Some(context) = self.context_mut() {
            context.path = Some(path.as_ref().display().to_string());
        }
        self
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        let context = match err.position() {
            Some(pos) => ErrorContext::default().with_details(format!("line={}", pos.line())),
            None => ErrorContext::default(),
        };
        DatasetError::csv(err.to_string(), context)
    }
}
