/// Name used for staging directory prefixes.
pub const APP_NAME: &str = "samplefs";

/// Environment variable that fixes the root boundary for virtualization.
pub const ROOT_ENV: &str = "SAMPLEFS_ROOT";

/// Suffix given to every staging directory.
pub const STAGING_SUFFIX: &str = ".samplefs";

/// Mode reported for virtual entries: every permission bit plus the regular-file type bit.
pub const VIRTUAL_FILE_MODE: u32 = 0o107777;
