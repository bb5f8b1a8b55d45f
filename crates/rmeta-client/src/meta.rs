//! Metadata mutation client.
//!
//! Translates local-style permission, ownership and timestamp changes into
//! `setPermission`, `setOwner` and `setTimes` calls on the metadata service.
//! Each call is a single attempt: failures are interpreted, wrapped with the
//! operation and path, and returned.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use rmeta_proto::meta::{FsPermission, MetaMethod, SetOwnerReq, SetPermissionReq, SetTimesReq};
use rmeta_stubs::{call, INamenodeExecutor};
use rmeta_types::{Status, StatusCode, UtcTime};

use crate::config::MetaClientConfig;
use crate::error::{MetaOp, MetaResult, PathError};
use crate::exception::{DefaultExceptionInterpreter, ExceptionInterpreter};

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Metadata mutations on remote paths.
#[async_trait]
pub trait MetaClient: Send + Sync {
    /// Change the permission bits of `path` to `mode`.
    ///
    /// The mode is sent exactly as given.
    async fn chmod(&self, path: &str, mode: u32) -> MetaResult<()>;

    /// Change the owning user and group of `path`.
    ///
    /// An empty `user` or `group` leaves that field unchanged remotely.
    async fn chown(&self, path: &str, user: &str, group: &str) -> MetaResult<()>;

    /// Change the access and/or modification time of `path`.
    ///
    /// `None` leaves the corresponding time unchanged; at least one must be
    /// set. Times are stored with whole-second precision. Times before the
    /// Unix epoch are rejected with `INVALID_ARG` and nothing is sent.
    async fn chtimes(
        &self,
        path: &str,
        atime: Option<UtcTime>,
        mtime: Option<UtcTime>,
    ) -> MetaResult<()>;
}

// ---------------------------------------------------------------------------
// Implementation
// ---------------------------------------------------------------------------

/// Concrete implementation of `MetaClient` on top of an injected executor.
pub struct MetaClientImpl {
    config: MetaClientConfig,
    executor: Arc<dyn INamenodeExecutor>,
    interpreter: Arc<dyn ExceptionInterpreter>,
}

impl MetaClientImpl {
    /// Create a client using the default exception interpreter, extended
    /// with the overrides from `config`.
    pub fn new(config: MetaClientConfig, executor: Arc<dyn INamenodeExecutor>) -> Self {
        let interpreter = Arc::new(DefaultExceptionInterpreter::from_config(&config));
        Self {
            config,
            executor,
            interpreter,
        }
    }

    /// Replace the exception interpreter.
    pub fn with_interpreter(mut self, interpreter: Arc<dyn ExceptionInterpreter>) -> Self {
        self.interpreter = interpreter;
        self
    }

    pub fn config(&self) -> &MetaClientConfig {
        &self.config
    }

    /// Issue `req` once and wrap any failure as `op` on `path`.
    async fn execute<Req>(&self, op: MetaOp, path: &str, req: Req) -> MetaResult<()>
    where
        Req: MetaMethod + Debug,
    {
        if self.config.log_requests {
            tracing::debug!(%op, path, method = Req::METHOD, request = ?req, "sending metadata request");
        } else {
            tracing::debug!(%op, path, method = Req::METHOD, "sending metadata request");
        }

        match call(self.executor.as_ref(), req).await {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::warn!(%op, path, method = Req::METHOD, error = %e, "metadata request failed");
                Err(PathError::new(op, path, self.interpreter.interpret(e)))
            }
        }
    }

    /// Encode an optional time as whole-second milliseconds since the epoch.
    fn encode_time(path: &str, time: Option<UtcTime>) -> MetaResult<Option<u64>> {
        time.map(|t| t.to_unix_millis_truncated())
            .transpose()
            .map_err(|cause| PathError::new(MetaOp::Chtimes, path, cause))
    }
}

#[async_trait]
impl MetaClient for MetaClientImpl {
    async fn chmod(&self, path: &str, mode: u32) -> MetaResult<()> {
        let req = SetPermissionReq {
            src: path.to_string(),
            permission: FsPermission::new(mode),
        };
        self.execute(MetaOp::Chmod, path, req).await
    }

    async fn chown(&self, path: &str, user: &str, group: &str) -> MetaResult<()> {
        let req = SetOwnerReq {
            src: path.to_string(),
            username: user.to_string(),
            groupname: group.to_string(),
        };
        self.execute(MetaOp::Chown, path, req).await
    }

    async fn chtimes(
        &self,
        path: &str,
        atime: Option<UtcTime>,
        mtime: Option<UtcTime>,
    ) -> MetaResult<()> {
        if atime.is_none() && mtime.is_none() {
            return Err(PathError::new(
                MetaOp::Chtimes,
                path,
                Status::with_message(StatusCode::INVALID_ARG, "atime or mtime must be set"),
            ));
        }

        let req = SetTimesReq {
            src: path.to_string(),
            atime: Self::encode_time(path, atime)?,
            mtime: Self::encode_time(path, mtime)?,
        };
        self.execute(MetaOp::Chtimes, path, req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExceptionOverride;
    use rmeta_proto::meta::{MetaRequest, SetOwnerRsp};
    use rmeta_proto::RemoteException;
    use rmeta_stubs::{ExecuteError, MockNamenodeExecutor};
    use rmeta_types::{MetaCode, RPCCode};

    fn test_client() -> (Arc<MockNamenodeExecutor>, MetaClientImpl) {
        let mock = MockNamenodeExecutor::new().into_arc();
        let client = MetaClientImpl::new(MetaClientConfig::default(), mock.clone());
        (mock, client)
    }

    fn time(secs: i64, nanos: u32) -> UtcTime {
        UtcTime::from_timestamp(secs, nanos).unwrap()
    }

    fn only_times_request(mock: &MockNamenodeExecutor) -> SetTimesReq {
        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "setTimes");
        match &calls[0].request {
            MetaRequest::SetTimes(req) => req.clone(),
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_chmod_sends_mode_verbatim() {
        let (mock, client) = test_client();
        for mode in [0o755, 0o4755, 0, u32::MAX] {
            client.chmod("/data/file", mode).await.unwrap();
        }

        let calls = mock.calls();
        assert_eq!(calls.len(), 4);
        let modes: Vec<u32> = calls
            .iter()
            .map(|c| {
                assert_eq!(c.method, "setPermission");
                match &c.request {
                    MetaRequest::SetPermission(req) => {
                        assert_eq!(req.src, "/data/file");
                        req.permission.perm
                    }
                    other => panic!("unexpected request: {other:?}"),
                }
            })
            .collect();
        assert_eq!(modes, vec![0o755, 0o4755, 0, u32::MAX]);
    }

    #[tokio::test]
    async fn test_chmod_failure_is_wrapped() {
        let (mock, client) = test_client();
        mock.fail_with(RemoteException::new(
            "org.apache.hadoop.security.AccessControlException",
            "Permission denied: user=bob",
        ));

        let err = client.chmod("/secure", 0o777).await.unwrap_err();
        assert_eq!(err.op, MetaOp::Chmod);
        assert_eq!(err.path, "/secure");
        assert_eq!(err.code(), MetaCode::NO_PERMISSION);
        assert_eq!(err.cause.message(), Some("Permission denied: user=bob"));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_chown_sends_both_fields() {
        let (mock, client) = test_client();
        client.chown("/a", "alice", "staff").await.unwrap();
        client.chown("/b", "", "staff").await.unwrap();
        client.chown("/c", "alice", "").await.unwrap();
        client.chown("/d", "", "").await.unwrap();

        let sent: Vec<(String, String, String)> = mock
            .calls()
            .into_iter()
            .map(|c| {
                assert_eq!(c.method, "setOwner");
                match c.request {
                    MetaRequest::SetOwner(req) => (req.src, req.username, req.groupname),
                    other => panic!("unexpected request: {other:?}"),
                }
            })
            .collect();
        let expected: Vec<(String, String, String)> = [
            ("/a", "alice", "staff"),
            ("/b", "", "staff"),
            ("/c", "alice", ""),
            ("/d", "", ""),
        ]
        .iter()
        .map(|(p, u, g)| (p.to_string(), u.to_string(), g.to_string()))
        .collect();
        assert_eq!(sent, expected);
    }

    #[tokio::test]
    async fn test_chown_failure_is_wrapped() {
        let (mock, client) = test_client();
        mock.fail_with(RemoteException::new("java.io.FileNotFoundException", ""));

        let err = client.chown("/missing", "alice", "").await.unwrap_err();
        assert_eq!(err.op, MetaOp::Chown);
        assert_eq!(err.path, "/missing");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_chtimes_requires_a_time() {
        let (mock, client) = test_client();
        let err = client.chtimes("/f", None, None).await.unwrap_err();

        assert_eq!(err.op, MetaOp::Chtimes);
        assert_eq!(err.path, "/f");
        assert_eq!(err.code(), StatusCode::INVALID_ARG);
        assert_eq!(err.cause.message(), Some("atime or mtime must be set"));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_chtimes_atime_only() {
        let (mock, client) = test_client();
        client
            .chtimes("/f", Some(time(1_600_000_000, 750_000_000)), None)
            .await
            .unwrap();

        let req = only_times_request(&mock);
        assert_eq!(req.src, "/f");
        assert_eq!(req.atime, Some(1_600_000_000_000));
        assert_eq!(req.mtime, None);
    }

    #[tokio::test]
    async fn test_chtimes_mtime_only() {
        let (mock, client) = test_client();
        client
            .chtimes("/f", None, Some(time(1_600_000_123, 1)))
            .await
            .unwrap();

        let req = only_times_request(&mock);
        assert_eq!(req.atime, None);
        assert_eq!(req.mtime, Some(1_600_000_123_000));
    }

    #[tokio::test]
    async fn test_chtimes_both_times() {
        let (mock, client) = test_client();
        client
            .chtimes(
                "/f",
                Some(time(10, 999_999_999)),
                Some(time(20, 0)),
            )
            .await
            .unwrap();

        let req = only_times_request(&mock);
        assert_eq!(req.atime, Some(10_000));
        assert_eq!(req.mtime, Some(20_000));
    }

    #[tokio::test]
    async fn test_chtimes_epoch_is_a_real_time() {
        let (mock, client) = test_client();
        client
            .chtimes("/f", Some(UtcTime::default()), None)
            .await
            .unwrap();

        let req = only_times_request(&mock);
        assert_eq!(req.atime, Some(0));
        assert_eq!(req.mtime, None);
    }

    #[tokio::test]
    async fn test_chtimes_truncates_sub_second() {
        let (mock, client) = test_client();
        let t = time(1_700_000_000, 999_000_000);
        client.chtimes("/f", None, Some(t)).await.unwrap();

        let millis = only_times_request(&mock).mtime.unwrap();
        let decoded = UtcTime::from_unix_millis(millis as i64).unwrap();
        assert_eq!(decoded.timestamp(), t.timestamp());
        // Truncated, not rounded up to the next second.
        assert_eq!(millis % 1000, 0);
        assert!(decoded < t);
    }

    #[tokio::test]
    async fn test_chtimes_rejects_pre_epoch() {
        let (mock, client) = test_client();
        let err = client
            .chtimes("/f", Some(time(-10, 0)), Some(time(10, 0)))
            .await
            .unwrap_err();
        assert_eq!(err.op, MetaOp::Chtimes);
        assert_eq!(err.path, "/f");
        assert_eq!(err.code(), StatusCode::INVALID_ARG);
        assert_eq!(
            err.cause.message(),
            Some("time 1969-12-31T23:59:50+00:00 is before the unix epoch")
        );
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mismatched_response_is_wrapped() {
        let (mock, client) = test_client();
        mock.on_execute(|_, _| Ok(SetOwnerRsp::default().into()));

        let err = client.chmod("/odd", 0o644).await.unwrap_err();
        assert_eq!(err.op, MetaOp::Chmod);
        assert_eq!(err.path, "/odd");
        assert_eq!(err.code(), RPCCode::VERIFY_RESPONSE_FAILED);
        assert_eq!(mock.call_count(), 1);

        let err = client
            .chtimes("/odd", Some(time(1, 0)), None)
            .await
            .unwrap_err();
        assert_eq!(err.op, MetaOp::Chtimes);
        assert_eq!(err.path, "/odd");
        assert_eq!(err.code(), RPCCode::VERIFY_RESPONSE_FAILED);
    }

    #[tokio::test]
    async fn test_chtimes_failure_is_wrapped() {
        let (mock, client) = test_client();
        mock.fail_with(Status::new(RPCCode::TIMEOUT));

        let err = client
            .chtimes("/slow", Some(time(1, 0)), None)
            .await
            .unwrap_err();
        assert_eq!(err.op, MetaOp::Chtimes);
        assert_eq!(err.path, "/slow");
        assert_eq!(err.cause, Status::new(RPCCode::TIMEOUT));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_every_failure_reports_op_and_path() {
        let (mock, client) = test_client();
        mock.fail_with(RemoteException::new("java.io.IOException", "disk"));

        let errs = [
            client.chmod("/p1", 0o600).await.unwrap_err(),
            client.chown("/p2", "u", "g").await.unwrap_err(),
            client.chtimes("/p3", None, Some(time(5, 0))).await.unwrap_err(),
        ];
        let seen: Vec<(MetaOp, &str)> = errs.iter().map(|e| (e.op, e.path.as_str())).collect();
        assert_eq!(
            seen,
            vec![
                (MetaOp::Chmod, "/p1"),
                (MetaOp::Chown, "/p2"),
                (MetaOp::Chtimes, "/p3"),
            ]
        );
        for e in &errs {
            assert_eq!(e.code(), StatusCode::UNKNOWN);
        }
        // One attempt per operation, no retries.
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn test_config_overrides_reach_interpreter() {
        let mock = MockNamenodeExecutor::new().into_arc();
        let config = MetaClientConfig {
            exception_overrides: vec![ExceptionOverride {
                class_name: "org.apache.ranger.authorization.RangerAccessException".into(),
                code: MetaCode::NO_PERMISSION,
            }],
            log_requests: true,
        };
        let client = MetaClientImpl::new(config, mock.clone());
        mock.fail_with(RemoteException::new(
            "org.apache.ranger.authorization.RangerAccessException",
            "denied by policy",
        ));

        let err = client.chmod("/ranger", 0o700).await.unwrap_err();
        assert_eq!(err.code(), MetaCode::NO_PERMISSION);
        assert!(client.config().log_requests);
    }

    #[tokio::test]
    async fn test_custom_interpreter() {
        let (mock, client) = test_client();
        let client = client.with_interpreter(Arc::new(|err: ExecuteError| {
            Status::with_message(StatusCode::IO_ERROR, err.to_string())
        }));
        mock.fail_with(RemoteException::new("java.io.FileNotFoundException", "gone"));

        let err = client.chmod("/x", 0o644).await.unwrap_err();
        assert_eq!(err.code(), StatusCode::IO_ERROR);
        assert_eq!(
            err.to_string(),
            "chmod /x: IOError(69) remote exception: java.io.FileNotFoundException: gone"
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers() {
        let (mock, client) = test_client();
        let client: Arc<dyn MetaClient> = Arc::new(client);

        let handles: Vec<_> = (0..32u32)
            .map(|i| {
                let client = client.clone();
                tokio::spawn(async move { client.chmod(&format!("/f{i}"), i).await })
            })
            .collect();
        for h in handles {
            h.await.unwrap().unwrap();
        }

        let mut modes: Vec<u32> = mock
            .calls()
            .into_iter()
            .filter_map(|c| match c.request {
                MetaRequest::SetPermission(req) => Some(req.permission.perm),
                _ => None,
            })
            .collect();
        modes.sort_unstable();
        assert_eq!(modes, (0..32).collect::<Vec<_>>());
    }
}
