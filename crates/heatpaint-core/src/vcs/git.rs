// crates/heatpaint-core/src/vcs/git.rs

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::calendar::iso_seconds;
use crate::error::{PaintError, Result};
use crate::vcs::{CommitDates, Vcs};

/// `git` driven as a subprocess rooted at `root`. Every call blocks until git exits.
#[derive(Clone, Debug)]
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn run<I, S>(&self, args: I, envs: &[(&str, String)]) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<_> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
        let command = std::iter::once("git".to_string())
            .chain(args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ");

        tracing::trace!(%command, "spawn");
        let out = Command::new("git")
            .current_dir(&self.root)
            .args(&args)
            .envs(envs.iter().map(|(k, v)| (*k, v.as_str())))
            .stdin(Stdio::null())
            .output()?;

        if !out.status.success() {
            return Err(PaintError::Vcs {
                command,
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl Vcs for GitCli {
    fn is_repository(&self) -> bool {
        self.root.join(".git").exists()
    }

    fn create_orphan_branch(&mut self, name: &str) -> Result<()> {
        self.run(["checkout", "-q", "--orphan", name], &[])
    }

    fn unstage_all(&mut self) -> Result<()> {
        self.run(["rm", "-r", "-f", "-q", "--cached", "."], &[])
    }

    fn stage_path(&mut self, path: &Path) -> Result<()> {
        self.run(
            [OsStr::new("add"), OsStr::new("--"), path.as_os_str()],
            &[],
        )
    }

    fn commit(&mut self, message: &str, dates: &CommitDates) -> Result<()> {
        let author = iso_seconds(&dates.author);
        // The committer date only has an environment override; set it on the child alone.
        let committer = [("GIT_COMMITTER_DATE", iso_seconds(&dates.committer))];
        self.run(
            ["commit", "-q", "--date", author.as_str(), "-m", message],
            &committer,
        )
    }
}
