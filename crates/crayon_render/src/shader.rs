//! Shader source loading
//!
//! The shader is compiled into the binary and can be overridden by a WGSL
//! file on disk, which is re-read on reload.

use std::fmt;
use std::path::{Path, PathBuf};

/// Shader compiled into the binary
pub const BUILTIN_SHADER: &str = include_str!("shaders/crayon.wgsl");

/// Errors loading or compiling a shader
#[derive(Debug)]
pub enum ShaderError {
    /// Shader file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// The device rejected the shader or the pipelines built from it
    Compile(String),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Io { path, source } => {
                write!(f, "Failed to read shader '{}': {}", path.display(), source)
            }
            ShaderError::Compile(msg) => write!(f, "Shader compilation failed: {}", msg),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Io { source, .. } => Some(source),
            ShaderError::Compile(_) => None,
        }
    }
}

/// Where the shader comes from
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShaderSource {
    /// Optional WGSL file overriding the built-in shader
    pub path: Option<PathBuf>,
}

impl ShaderSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Source for the first pipeline build
    ///
    /// A missing or unreadable file falls back to the built-in shader.
    pub fn initial(&self) -> String {
        match self.read() {
            Ok(Some(source)) => source,
            Ok(None) => BUILTIN_SHADER.to_string(),
            Err(e) => {
                log::warn!("{}; using built-in shader", e);
                BUILTIN_SHADER.to_string()
            }
        }
    }

    /// Source for a reload: the file if configured, else the built-in shader
    pub fn reload(&self) -> Result<String, ShaderError> {
        Ok(self.read()?.unwrap_or_else(|| BUILTIN_SHADER.to_string()))
    }

    fn read(&self) -> Result<Option<String>, ShaderError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };
        read_shader(path).map(Some)
    }
}

fn read_shader(path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_entry_points() {
        assert!(BUILTIN_SHADER.contains("fn vs_main"));
        assert!(BUILTIN_SHADER.contains("fn fs_main"));
    }

    #[test]
    fn test_no_path_uses_builtin() {
        let source = ShaderSource::default();
        assert_eq!(source.initial(), BUILTIN_SHADER);
        assert_eq!(source.reload().unwrap(), BUILTIN_SHADER);
    }

    #[test]
    fn test_missing_file() {
        let source = ShaderSource::new(Some(PathBuf::from("does/not/exist.wgsl")));
        assert_eq!(source.initial(), BUILTIN_SHADER);

        let err = source.reload().unwrap_err();
        assert!(matches!(err, ShaderError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.wgsl"));
    }

    #[test]
    fn test_reads_file() {
        let path = std::env::temp_dir().join("crayon_shader_test.wgsl");
        std::fs::write(&path, "// custom").unwrap();
        let source = ShaderSource::new(Some(path.clone()));
        assert_eq!(source.reload().unwrap(), "// custom");
        std::fs::remove_file(path).ok();
    }
}
