use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// tests, and process exit reporting. Diffing itself accepts every pair of
/// strings; the kinds below cover the collaborator and I/O failures around
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A caller-supplied value is out of range (CLI arguments)
    InvalidInput,

    // Sequence-diff primitive
    /// The sequence-diff primitive is unavailable or failed
    ExternalService,
    /// The primitive returned runs that do not describe its inputs
    DeterminismViolation,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::DeterminismViolation => "ERR_DETERMINISM_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation
/// and message context needed to debug it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
    source: Option<Box<DiffError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the originating diff error
    pub fn with_source(mut self, source: DiffError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the originating diff error, if any
    pub fn source_error(&self) -> Option<&DiffError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Failures raised at the sequence-diff boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The sequence-diff primitive failed or is unavailable
    #[error("Sequence diff primitive failed: {message}")]
    Primitive { message: String },

    /// Runs skip, overlap, or overrun part of one input
    #[error("Diff runs do not cover the {side} sequence: expected position {expected}, got {covered}")]
    InconsistentRuns {
        side: String,
        expected: usize,
        covered: usize,
    },

    /// A kept run pairs tokens that are not equal
    #[error("Kept run pairs unequal tokens at original {old_index}, modified {new_index}")]
    KeptMismatch { old_index: usize, new_index: usize },
}

impl DiffError {
    pub fn primitive(message: impl Into<String>) -> Self {
        DiffError::Primitive {
            message: message.into(),
        }
    }
}

impl From<DiffError> for ExError {
    fn from(err: DiffError) -> Self {
        let kind = match &err {
            DiffError::Primitive { .. } => ExErrorKind::ExternalService,
            DiffError::InconsistentRuns { .. } | DiffError::KeptMismatch { .. } => {
                ExErrorKind::DeterminismViolation
            }
        };
        ExError::new(kind)
            .with_message(err.to_string())
            .with_source(err)
    }
}
