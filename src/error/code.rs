/// Error codes with category prefix
///
/// Categories:
/// - REG: Registry loading
/// - CMP: Component lookup
/// - NET: Remote file fetching
/// - IO: File system operations
/// - CFG: Project configuration / document parsing
/// - VAL: Input validation
/// - INS: Install outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Registry manifest unavailable
    Reg001,

    /// Component not found
    Cmp001,

    /// Connection failed
    Net001,
    /// Request timeout
    Net002,
    /// Non-success HTTP status
    Net003,

    /// Source file referenced by the manifest is missing
    Io001,
    /// Generic I/O failure
    Io002,

    /// Invalid project config
    Cfg001,
    /// Invalid JSON document
    Cfg002,

    /// Invalid argument
    Val001,
    /// Unsafe target path
    Val002,

    /// Install finished with failures
    Ins001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "NET001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Reg001 => "REG001",
            ErrorCode::Cmp001 => "CMP001",
            ErrorCode::Net001 => "NET001",
            ErrorCode::Net002 => "NET002",
            ErrorCode::Net003 => "NET003",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cfg002 => "CFG002",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
            ErrorCode::Ins001 => "INS001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Reg001 => "Neither a local registry manifest nor the remote registry could be read",
            ErrorCode::Cmp001 => "No registry component matches the given name, title or alias",
            ErrorCode::Net001 => "Unable to establish a connection to the registry host",
            ErrorCode::Net002 => "The request timed out while waiting for the registry host",
            ErrorCode::Net003 => "The registry host answered with an error status",
            ErrorCode::Io001 => "A file listed in the registry manifest does not exist on disk",
            ErrorCode::Io002 => "A file system operation failed",
            ErrorCode::Cfg001 => "The project configuration is invalid",
            ErrorCode::Cfg002 => "A JSON document could not be parsed",
            ErrorCode::Val001 => "An invalid argument was provided",
            ErrorCode::Val002 => "A registry file target points outside the project",
            ErrorCode::Ins001 => "Some components were not found, or files could not be fetched or written",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Reg001 => "1. Check your internet connection\n2. Verify KITCTL_REGISTRY_URL or --registry-url\n3. Use --registry-dir to point at a local registry checkout",
            ErrorCode::Cmp001 => "1. Check the component name for typos\n2. Use 'kitctl search <query>' to find components\n3. Use 'kitctl list' to see every component",
            ErrorCode::Net001 => "1. Check your internet connection\n2. Verify the registry URL is correct\n3. Try again later if the host is down",
            ErrorCode::Net002 => "1. Check your internet connection speed\n2. Retry the command\n3. The host may be overloaded, try later",
            ErrorCode::Net003 => "1. Verify the registry URL points at a registry root\n2. Check that the registry version contains the file\n3. Report the broken entry to the registry maintainers",
            ErrorCode::Io001 => "1. Update your local registry checkout\n2. Verify the manifest paths match the files on disk\n3. Report the broken entry to the registry maintainers",
            ErrorCode::Io002 => "1. Check file and directory permissions\n2. Verify the destination disk has free space\n3. Retry the command",
            ErrorCode::Cfg001 => "1. Check kit.json syntax\n2. Run 'kitctl init --force' to regenerate it\n3. Compare against the documented fields",
            ErrorCode::Cfg002 => "1. Validate the JSON document\n2. Restore it from version control\n3. Regenerate it if it is generated",
            ErrorCode::Val001 => "1. Check the argument format\n2. Refer to the command help\n3. Use 'kitctl --help' for usage information",
            ErrorCode::Val002 => "1. Report the broken entry to the registry maintainers\n2. Install the remaining components individually",
            ErrorCode::Ins001 => "1. Review the unknown names and failed files listed above\n2. Files already written were kept on disk\n3. Re-run with --overwrite once the cause is fixed",
        }
    }
}
