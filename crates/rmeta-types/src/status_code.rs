/// Numeric status code carried by every [`Status`](crate::Status).
#[allow(non_camel_case_types)]
pub type status_code_t = u16;

/// Common status codes (0-999).
pub mod StatusCode {
    use super::status_code_t;

    pub const OK: status_code_t = 0;
    pub const NOT_IMPLEMENTED: status_code_t = 1;
    pub const DATA_CORRUPTION: status_code_t = 2;
    pub const INVALID_ARG: status_code_t = 3;
    pub const INVALID_CONFIG: status_code_t = 4;
    pub const AUTHENTICATION_FAIL: status_code_t = 25;
    pub const INTERRUPTED: status_code_t = 27;
    pub const INVALID_FORMAT: status_code_t = 33;
    pub const READ_ONLY_MODE: status_code_t = 34;
    pub const IO_ERROR: status_code_t = 69;
    pub const CONFIG_PARSE_ERROR: status_code_t = 71;
    pub const OS_ERROR: status_code_t = 72;
    pub const FOUND_BUG: status_code_t = 998;
    pub const UNKNOWN: status_code_t = 999;
}

/// RPC status codes (2xxx), produced by the executor itself rather than
/// by the remote service.
pub mod RPCCode {
    use super::status_code_t;

    pub const INVALID_MESSAGE_TYPE: status_code_t = 2000;
    pub const REQUEST_IS_EMPTY: status_code_t = 2001;
    pub const VERIFY_REQUEST_FAILED: status_code_t = 2002;
    pub const VERIFY_RESPONSE_FAILED: status_code_t = 2003;
    pub const TIMEOUT: status_code_t = 2005;
    pub const INVALID_ADDR: status_code_t = 2006;
    pub const SEND_FAILED: status_code_t = 2007;
    pub const INVALID_METHOD_ID: status_code_t = 2009;
    pub const SOCKET_ERROR: status_code_t = 2010;
    pub const REQUEST_REFUSED: status_code_t = 2012;
    pub const SOCKET_CLOSED: status_code_t = 2013;
    pub const CONNECT_FAILED: status_code_t = 2014;
}

/// Metadata service status codes (3xxx).
pub mod MetaCode {
    use super::status_code_t;

    pub const NOT_FOUND: status_code_t = 3000;
    pub const NOT_EMPTY: status_code_t = 3001;
    pub const NOT_DIRECTORY: status_code_t = 3003;
    pub const TOO_MANY_SYMLINKS: status_code_t = 3005;
    pub const IS_DIRECTORY: status_code_t = 3006;
    pub const EXISTS: status_code_t = 3007;
    pub const NO_PERMISSION: status_code_t = 3008;
    pub const NAME_TOO_LONG: status_code_t = 3017;
    pub const REQUEST_CANCELED: status_code_t = 3018;
    pub const BUSY: status_code_t = 3019;
    pub const QUOTA_EXCEEDED: status_code_t = 3103;
    pub const FOUND_BUG: status_code_t = 3999;
}

/// Classification of status code ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum StatusCodeType {
    Invalid = -1,
    Common = 0,
    RPC = 2,
    Meta = 3,
}

/// Determine the type/category of a status code.
pub fn type_of(code: status_code_t) -> StatusCodeType {
    match code {
        0..=999 => StatusCodeType::Common,
        2000..=2999 => StatusCodeType::RPC,
        3000..=3999 => StatusCodeType::Meta,
        _ => StatusCodeType::Invalid,
    }
}

/// Convert a status code to its human-readable name.
pub fn to_string(code: status_code_t) -> &'static str {
    match code {
        // Common
        StatusCode::OK => "OK",
        StatusCode::NOT_IMPLEMENTED => "NotImplemented",
        StatusCode::DATA_CORRUPTION => "DataCorruption",
        StatusCode::INVALID_ARG => "InvalidArg",
        StatusCode::INVALID_CONFIG => "InvalidConfig",
        StatusCode::AUTHENTICATION_FAIL => "AuthenticationFail",
        StatusCode::INTERRUPTED => "Interrupted",
        StatusCode::INVALID_FORMAT => "InvalidFormat",
        StatusCode::READ_ONLY_MODE => "ReadOnlyMode",
        StatusCode::IO_ERROR => "IOError",
        StatusCode::CONFIG_PARSE_ERROR => "ConfigParseError",
        StatusCode::OS_ERROR => "OSError",
        StatusCode::FOUND_BUG => "FoundBug",
        StatusCode::UNKNOWN => "Unknown",

        // RPC
        RPCCode::INVALID_MESSAGE_TYPE => "RPC::InvalidMessageType",
        RPCCode::REQUEST_IS_EMPTY => "RPC::RequestIsEmpty",
        RPCCode::VERIFY_REQUEST_FAILED => "RPC::VerifyRequestFailed",
        RPCCode::VERIFY_RESPONSE_FAILED => "RPC::VerifyResponseFailed",
        RPCCode::TIMEOUT => "RPC::Timeout",
        RPCCode::INVALID_ADDR => "RPC::InvalidAddr",
        RPCCode::SEND_FAILED => "RPC::SendFailed",
        RPCCode::INVALID_METHOD_ID => "RPC::InvalidMethodId",
        RPCCode::SOCKET_ERROR => "RPC::SocketError",
        RPCCode::REQUEST_REFUSED => "RPC::RequestRefused",
        RPCCode::SOCKET_CLOSED => "RPC::SocketClosed",
        RPCCode::CONNECT_FAILED => "RPC::ConnectFailed",

        // Meta
        MetaCode::NOT_FOUND => "Meta::NotFound",
        MetaCode::NOT_EMPTY => "Meta::NotEmpty",
        MetaCode::NOT_DIRECTORY => "Meta::NotDirectory",
        MetaCode::TOO_MANY_SYMLINKS => "Meta::TooManySymlinks",
        MetaCode::IS_DIRECTORY => "Meta::IsDirectory",
        MetaCode::EXISTS => "Meta::Exists",
        MetaCode::NO_PERMISSION => "Meta::NoPermission",
        MetaCode::NAME_TOO_LONG => "Meta::NameTooLong",
        MetaCode::REQUEST_CANCELED => "Meta::RequestCanceled",
        MetaCode::BUSY => "Meta::Busy",
        MetaCode::QUOTA_EXCEEDED => "Meta::QuotaExceeded",
        MetaCode::FOUND_BUG => "Meta::FoundBug",

        _ => "UnknownStatusCode",
    }
}

/// Whether `code` has a registered name.
pub fn is_known(code: status_code_t) -> bool {
    to_string(code) != "UnknownStatusCode"
}

/// Convert a status code to the corresponding POSIX errno value.
pub fn to_errno(code: status_code_t) -> i32 {
    // All RPC codes map to EIO (remote I/O error)
    if type_of(code) == StatusCodeType::RPC {
        return libc::EIO;
    }

    match code {
        c if c == StatusCode::INVALID_ARG => libc::EINVAL,
        c if c == StatusCode::NOT_IMPLEMENTED => libc::ENOSYS,
        c if c == StatusCode::AUTHENTICATION_FAIL => libc::EPERM,
        c if c == StatusCode::READ_ONLY_MODE => libc::EROFS,
        c if c == StatusCode::INTERRUPTED => libc::EINTR,

        c if c == MetaCode::REQUEST_CANCELED => libc::EINTR,
        c if c == MetaCode::NOT_FOUND => libc::ENOENT,
        c if c == MetaCode::NOT_EMPTY => libc::ENOTEMPTY,
        c if c == MetaCode::NOT_DIRECTORY => libc::ENOTDIR,
        c if c == MetaCode::TOO_MANY_SYMLINKS => libc::ELOOP,
        c if c == MetaCode::IS_DIRECTORY => libc::EISDIR,
        c if c == MetaCode::EXISTS => libc::EEXIST,
        c if c == MetaCode::NO_PERMISSION => libc::EPERM,
        c if c == MetaCode::NAME_TOO_LONG => libc::ENAMETOOLONG,
        c if c == MetaCode::QUOTA_EXCEEDED => libc::EDQUOT,

        _ => libc::EIO,
    }
}
