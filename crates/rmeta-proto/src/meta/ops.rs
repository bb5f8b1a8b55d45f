//! Metadata-mutation request/response records and their procedure names.

use serde::{Deserialize, Serialize};

use super::types::*;

/// Binds a request record to its remote procedure name and response record.
pub trait MetaMethod: Into<MetaRequest> + Send + 'static {
    /// Procedure name understood by the metadata service.
    const METHOD: &'static str;

    /// Acknowledgement record returned on success.
    type Rsp: TryFrom<MetaResponse, Error = MetaResponse> + Into<MetaResponse> + Default + Send;
}

// ---- SetPermission ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetPermissionReq {
    pub src: String,
    pub permission: FsPermission,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetPermissionRsp {}

// ---- SetOwner ----

/// An empty `username` or `groupname` asks the service to keep that field.
/// Both fields are always sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetOwnerReq {
    pub src: String,
    pub username: String,
    pub groupname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetOwnerRsp {}

// ---- SetTimes ----

/// Times are milliseconds since the epoch. An absent field is omitted from
/// the encoded record and leaves the remote timestamp untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetTimesReq {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atime: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtime: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetTimesRsp {}

// ---- Envelopes ----

/// Any request this client can hand to the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetaRequest {
    SetPermission(SetPermissionReq),
    SetOwner(SetOwnerReq),
    SetTimes(SetTimesReq),
}

/// Any acknowledgement the executor can populate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetaResponse {
    SetPermission(SetPermissionRsp),
    SetOwner(SetOwnerRsp),
    SetTimes(SetTimesRsp),
}

macro_rules! meta_method {
    ($variant:ident, $req:ty, $rsp:ty, $name:literal) => {
        impl MetaMethod for $req {
            const METHOD: &'static str = $name;
            type Rsp = $rsp;
        }

        impl From<$req> for MetaRequest {
            fn from(req: $req) -> Self {
                MetaRequest::$variant(req)
            }
        }

        impl From<$rsp> for MetaResponse {
            fn from(rsp: $rsp) -> Self {
                MetaResponse::$variant(rsp)
            }
        }

        impl TryFrom<MetaResponse> for $rsp {
            type Error = MetaResponse;

            fn try_from(rsp: MetaResponse) -> Result<Self, MetaResponse> {
                match rsp {
                    MetaResponse::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }
    };
}

meta_method!(SetPermission, SetPermissionReq, SetPermissionRsp, "setPermission");
meta_method!(SetOwner, SetOwnerReq, SetOwnerRsp, "setOwner");
meta_method!(SetTimes, SetTimesReq, SetTimesRsp, "setTimes");

impl MetaRequest {
    /// Procedure name of the wrapped record.
    pub fn method(&self) -> &'static str {
        match self {
            MetaRequest::SetPermission(_) => SetPermissionReq::METHOD,
            MetaRequest::SetOwner(_) => SetOwnerReq::METHOD,
            MetaRequest::SetTimes(_) => SetTimesReq::METHOD,
        }
    }

    /// Target path of the wrapped record.
    pub fn src(&self) -> &str {
        match self {
            MetaRequest::SetPermission(req) => &req.src,
            MetaRequest::SetOwner(req) => &req.src,
            MetaRequest::SetTimes(req) => &req.src,
        }
    }

    /// Empty acknowledgement matching this request.
    pub fn default_response(&self) -> MetaResponse {
        match self {
            MetaRequest::SetPermission(_) => SetPermissionRsp::default().into(),
            MetaRequest::SetOwner(_) => SetOwnerRsp::default().into(),
            MetaRequest::SetTimes(_) => SetTimesRsp::default().into(),
        }
    }
}

impl MetaResponse {
    /// Procedure name this acknowledgement belongs to.
    pub fn method(&self) -> &'static str {
        match self {
            MetaResponse::SetPermission(_) => SetPermissionReq::METHOD,
            MetaResponse::SetOwner(_) => SetOwnerReq::METHOD,
            MetaResponse::SetTimes(_) => SetTimesReq::METHOD,
        }
    }
}
