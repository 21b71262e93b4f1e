/// Error code registry for photo-migrate
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Storage errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_MISSING_REQUIRED: u16 = 1004;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_PATH_ERROR: u16 = 1006;
    pub const CONFIG_PARSE_ERROR: u16 = 1007;

    // Storage errors (3000-3999)
    pub const STORAGE_QUERY_FAILED: u16 = 3001;
    pub const STORAGE_CORRUPTED: u16 = 3006;
    pub const STORAGE_BACKEND_ERROR: u16 = 3010;
    pub const STORAGE_CONNECTION_FAILED: u16 = 3011;
}

/// Human readable description of an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1001 => "Configuration file not found",
        1004 => "Required configuration field is missing",
        1005 => "Invalid value in configuration",
        1006 => "Configuration path error",
        1007 => "Failed to parse configuration",

        // Storage errors
        3001 => "Database query failed",
        3006 => "Database returned rows of an unexpected shape",
        3010 => "Storage backend misconfigured",
        3011 => "Could not connect to the database",

        _ => "Unknown error code",
    }
}
