use super::SolverError;
use log::Level;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// log target that per-job lines are forwarded to.
pub const JOB_LOG_TARGET: &str = "odaccess::job";

/// logging context owned by a single chunk solver.
///
/// a file-backed logger writes `<pid> | <LEVEL> | <message>` lines to its own
/// log file and mirrors each line to the `log` facade at debug level, keeping
/// worker chatter off the console. a process-only logger has no file and logs
/// straight to the facade at the given level. the file is flushed and closed
/// when the logger is closed or dropped.
pub struct JobLogger {
    job_id: String,
    path: Option<PathBuf>,
    writer: Option<BufWriter<File>>,
}

impl JobLogger {
    pub fn to_file(folder: &Path, job_id: &str) -> Result<JobLogger, SolverError> {
        let path = folder.join(format!("chunk_job_{job_id}.log"));
        let file = File::create(&path).map_err(|source| SolverError::LogFileError {
            filepath: path.to_string_lossy().to_string(),
            source,
        })?;
        Ok(JobLogger {
            job_id: job_id.to_string(),
            path: Some(path),
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn process_only(job_id: &str) -> JobLogger {
        JobLogger {
            job_id: job_id.to_string(),
            path: None,
            writer: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn log(&mut self, level: Level, msg: &str) {
        match self.writer.as_mut() {
            Some(writer) => {
                if let Err(e) = writeln!(writer, "{} | {} | {}", std::process::id(), level, msg) {
                    log::warn!("job {} failed writing its log file: {}", self.job_id, e);
                }
                log::debug!(target: JOB_LOG_TARGET, "[{}] {}", self.job_id, msg);
            }
            None => log::log!(level, "{msg}"),
        }
    }

    pub fn debug(&mut self, msg: &str) {
        self.log(Level::Debug, msg)
    }

    pub fn info(&mut self, msg: &str) {
        self.log(Level::Info, msg)
    }

    pub fn warn(&mut self, msg: &str) {
        self.log(Level::Warn, msg)
    }

    pub fn error(&mut self, msg: &str) {
        self.log(Level::Error, msg)
    }

    pub fn close(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.flush() {
                log::warn!("job {} failed closing its log file: {}", self.job_id, e);
            }
        }
    }
}

impl Drop for JobLogger {
    fn drop(&mut self) {
        self.close()
    }
}
