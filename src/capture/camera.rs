use std::path::Path;

use tokio::process::Command;
use tracing::{debug, warn};

use super::CaptureError;

/// Exit code of a program interrupted by the user (SIGINT).
const INTERRUPTED: i32 = 130;

/// Runs camera `command` so that it writes a photo into `output`.
pub(super) async fn shoot(command: &[String], output: &Path) -> Result<(), CaptureError> {
    let (program, args) = command.split_first().ok_or(CaptureError::CameraUnavailable)?;
    let output_str = output.display().to_string();
    let args = args
        .iter()
        .map(|a| a.replace("{output}", &output_str))
        .collect::<Vec<_>>();

    debug!("Running camera: {} {:?}", program, args);

    let status = Command::new(program)
        .args(&args)
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CaptureError::CameraUnavailable,
            _ => CaptureError::from(e),
        })?;

    match status.code() {
        Some(INTERRUPTED) => Err(CaptureError::Cancelled),
        _ if !status.success() => {
            warn!("Camera command failed with {}", status);
            Err(CaptureError::Camera(status.to_string()))
        }
        _ if !output.is_file() => Err(CaptureError::Cancelled),
        _ => Ok(()),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["sh".to_string(), "-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    async fn failing_command() {
        let dir = tempfile::tempdir().unwrap();
        let r = shoot(&sh("exit 3"), &dir.path().join("x.jpg")).await;
        assert!(matches!(r, Err(CaptureError::Camera(_))));
    }

    #[tokio::test]
    async fn interrupted_command() {
        let dir = tempfile::tempdir().unwrap();
        let r = shoot(&sh("exit 130"), &dir.path().join("x.jpg")).await;
        assert!(matches!(r, Err(CaptureError::Cancelled)));
    }

    #[tokio::test]
    async fn no_output_means_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let r = shoot(&sh("true"), &dir.path().join("x.jpg")).await;
        assert!(matches!(r, Err(CaptureError::Cancelled)));
    }

    #[tokio::test]
    async fn missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let r = shoot(
            &["definitely-not-a-camera-program".to_string()],
            &dir.path().join("x.jpg"),
        )
        .await;
        assert!(matches!(r, Err(CaptureError::CameraUnavailable)));
    }

    #[tokio::test]
    async fn output_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("x.jpg");
        let mut command = sh("echo photo > \"$0\"");
        command.push("{output}".to_string());

        shoot(&command, &out).await.unwrap();
        assert!(out.is_file());
    }
}
