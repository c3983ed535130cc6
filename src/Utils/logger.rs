use crate::matrix::dense_matrix::Matrix;
use crate::matrix::matrix_errors::MatrixError;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::fs::File;
use std::io::Write;

/// Set up terminal logging for demo runs.
///
/// `loglevel` accepts "debug", "info", "warn", "error" or "none"; `None` defaults
/// to Info. Repeated initialization is tolerated so every demo can call this
/// without caring whether another demo ran first.
pub fn init_console_logging(loglevel: Option<&str>) {
    let log_option = if let Some(level) = loglevel {
        match level {
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "none" => LevelFilter::Off,
            _ => panic!("loglevel must be debug, info, warn, error or none"),
        }
    } else {
        LevelFilter::Info
    };
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    match logger_instance {
        Ok(()) => {}
        Err(_) => {} // already initialized by an earlier call
    }
}

/// Persist a matrix as one line of its bracket literal, readable back through the
/// file-backed operand loader.
pub fn save_matrix_to_file(matrix: &Matrix, filename: &str) -> Result<(), MatrixError> {
    let mut file = File::create(filename)
        .map_err(|e| MatrixError::Resource(format!("Unable to create file {}: {}", filename, e)))?;
    writeln!(file, "{}", matrix)
        .map_err(|e| MatrixError::Resource(format!("Unable to write {}: {}", filename, e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::operand_loader::{FileLoader, Loader};

    #[test]
    fn test_saved_matrix_round_trips_through_file_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.txt");
        let matrix = Matrix::from_text("[1.5,-2;3,4]").unwrap();

        save_matrix_to_file(&matrix, path.to_str().unwrap()).unwrap();

        let mut loader = FileLoader::new(&path);
        assert_eq!(loader.next_operand().unwrap(), matrix);
    }

    #[test]
    fn test_save_to_unwritable_path_is_resource_error() {
        let matrix = Matrix::from_text("[1]").unwrap();
        let result = save_matrix_to_file(&matrix, "/no/such/dir/saved.txt");
        assert!(matches!(result, Err(MatrixError::Resource(_))));
    }
}
