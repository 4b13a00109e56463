use crate::client::ApiClient;
use crate::models::backups::{
    Backup, BackupComplete, BackupJob, BackupList, BackupsInfo, BackupsOptions,
    DownloadBackupOptions, FreezeOptions, FullBackupOptions, FullRestoreOptions, NewBackup,
    PartialBackupOptions, PartialRestoreOptions, RemoveBackupOptions, UploadBackupOptions,
    UploadedBackup,
};
use crate::streaming::ByteStream;
use crate::transport::MultipartUpload;
use crate::{CallOptions, ResponseKind, SupervisorError};

/// Backups (`backups/`).
///
/// Creating and restoring a backup waits for the job to finish, so those
/// calls run without a deadline unless `background` is set.
#[derive(Clone, Copy, Debug)]
pub struct BackupsClient<'a> {
    api: &'a ApiClient,
}

/// Waiting calls get no deadline, background calls return once the job is queued.
fn job_options(background: bool) -> CallOptions {
    let options = CallOptions::new().response(ResponseKind::Json);
    if background { options } else { options.no_timeout() }
}

impl<'a> BackupsClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Backup>, SupervisorError> {
        let list: BackupList = self.api.get("backups", CallOptions::new()).await?.decode()?;
        Ok(list.backups)
    }

    pub async fn info(&self) -> Result<BackupsInfo, SupervisorError> {
        self.api
            .get("backups/info", CallOptions::new())
            .await?
            .decode()
    }

    pub async fn options(&self, options: &BackupsOptions) -> Result<(), SupervisorError> {
        self.api
            .post("backups/options", CallOptions::new().json(options)?)
            .await?;
        Ok(())
    }

    /// Rescan backup locations.
    pub async fn reload(&self) -> Result<(), SupervisorError> {
        self.api.post("backups/reload", CallOptions::new()).await?;
        Ok(())
    }

    /// Prepare for an external backup.
    pub async fn freeze(&self, options: Option<&FreezeOptions>) -> Result<(), SupervisorError> {
        self.api
            .post("backups/freeze", CallOptions::new().json_opt(options)?)
            .await?;
        Ok(())
    }

    pub async fn thaw(&self) -> Result<(), SupervisorError> {
        self.api.post("backups/thaw", CallOptions::new()).await?;
        Ok(())
    }

    pub async fn full_backup(
        &self,
        options: Option<&FullBackupOptions>,
    ) -> Result<NewBackup, SupervisorError> {
        let background = options.is_some_and(FullBackupOptions::is_background);
        self.api
            .post("backups/new/full", job_options(background).json_opt(options)?)
            .await?
            .decode()
    }

    pub async fn partial_backup(
        &self,
        options: &PartialBackupOptions,
    ) -> Result<NewBackup, SupervisorError> {
        self.api
            .post(
                "backups/new/partial",
                job_options(options.backup.is_background()).json(options)?,
            )
            .await?
            .decode()
    }

    pub async fn backup_info(&self, backup: &str) -> Result<BackupComplete, SupervisorError> {
        self.api
            .get(&format!("backups/{backup}/info"), CallOptions::new())
            .await?
            .decode()
    }

    /// Remove a backup, from the given locations only if any are set.
    pub async fn remove_backup(
        &self,
        backup: &str,
        options: Option<&RemoveBackupOptions>,
    ) -> Result<(), SupervisorError> {
        self.api
            .delete(
                &format!("backups/{backup}"),
                CallOptions::new().json_opt(options)?,
            )
            .await?;
        Ok(())
    }

    pub async fn full_restore(
        &self,
        backup: &str,
        options: Option<&FullRestoreOptions>,
    ) -> Result<BackupJob, SupervisorError> {
        let background = options.is_some_and(FullRestoreOptions::is_background);
        self.api
            .post(
                &format!("backups/{backup}/restore/full"),
                job_options(background).json_opt(options)?,
            )
            .await?
            .decode()
    }

    pub async fn partial_restore(
        &self,
        backup: &str,
        options: &PartialRestoreOptions,
    ) -> Result<BackupJob, SupervisorError> {
        self.api
            .post(
                &format!("backups/{backup}/restore/partial"),
                job_options(options.restore.is_background()).json(options)?,
            )
            .await?
            .decode()
    }

    /// Upload a backup tarball and return its slug.
    ///
    /// The body is streamed as `multipart/form-data`; build the upload from
    /// a file stream or from bytes with [`MultipartUpload`].
    pub async fn upload_backup(
        &self,
        upload: MultipartUpload,
        options: Option<&UploadBackupOptions>,
    ) -> Result<String, SupervisorError> {
        let mut upload = upload;
        let mut call = CallOptions::new().response(ResponseKind::Json).no_timeout();
        if let Some(options) = options {
            call = call.query_all("location", options.query_locations());
            if let Some(filename) = &options.filename {
                upload = upload.filename(filename.clone());
            }
        }
        let uploaded: UploadedBackup = self
            .api
            .post("backups/new/upload", call.multipart(upload))
            .await?
            .decode()?;
        Ok(uploaded.slug)
    }

    /// Stream a backup tarball.
    ///
    /// The returned stream reads from the live connection and has no deadline.
    pub async fn download_backup(
        &self,
        backup: &str,
        options: Option<&DownloadBackupOptions>,
    ) -> Result<ByteStream, SupervisorError> {
        let mut call = CallOptions::new().response(ResponseKind::Stream).no_timeout();
        if let Some(location) = options.and_then(DownloadBackupOptions::query_location) {
            call = call.query("location", location);
        }
        self.api
            .get(&format!("backups/{backup}/download"), call)
            .await?
            .into_stream()
    }
}
