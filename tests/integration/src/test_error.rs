//! Error normalization integration tests.

#[cfg(test)]
mod tests {
    use s3wire_core::RequestParams;
    use s3wire_model::{S3ErrorCode, S3Operation};

    use crate::{default_client, exchange, response};

    #[test]
    fn test_should_normalize_bodyless_head_errors() -> anyhow::Result<()> {
        let client = default_client();
        let params = RequestParams::object("bucket", "missing.txt");

        for (status, code) in [
            (304, S3ErrorCode::NotModified),
            (403, S3ErrorCode::Forbidden),
            (404, S3ErrorCode::NotFound),
            (412, S3ErrorCode::Status(412)),
        ] {
            let reply = response(status, &[("x-amz-request-id", "REQ")], b"")?;
            let (_, outcome) = exchange(&client, S3Operation::HeadObject, &params, &reply)?;
            let err = outcome.error().expect("error outcome");
            assert_eq!(err.code, code);
            assert_eq!(err.status_code, status);
            assert!(err.message.is_none());
            assert_eq!(err.request_id.as_deref(), Some("REQ"));
        }
        Ok(())
    }

    #[test]
    fn test_should_serialize_numeric_code_as_number() -> anyhow::Result<()> {
        let reply = response(412, &[], b"")?;
        let (_, outcome) = exchange(
            &default_client(),
            S3Operation::HeadObject,
            &RequestParams::object("bucket", "k").with_param("IfMatch", "\"nope\""),
            &reply,
        )?;
        let json = serde_json::to_value(&outcome)?;
        assert_eq!(json["error"]["code"], serde_json::json!(412));
        assert!(json["error"]["message"].is_null());
        Ok(())
    }

    #[test]
    fn test_should_decode_error_document() -> anyhow::Result<()> {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>NoSuchBucket</Code>
  <Message>The specified bucket does not exist</Message>
  <BucketName>ghost</BucketName>
  <Resource>/ghost</Resource>
  <RequestId>8A2D</RequestId>
  <HostId>c2lnbmF0dXJl</HostId>
</Error>"#;
        let reply = response(404, &[("x-amz-request-id", "IGNORED")], body)?;
        let (_, outcome) = exchange(
            &default_client(),
            S3Operation::ListObjectsV2,
            &RequestParams::bucket("ghost"),
            &reply,
        )?;

        let err = outcome.into_result().expect_err("error outcome");
        assert_eq!(err.code, S3ErrorCode::NoSuchBucket);
        assert_eq!(err.message.as_deref(), Some("The specified bucket does not exist"));
        assert_eq!(err.resource.as_deref(), Some("/ghost"));
        assert_eq!(err.request_id.as_deref(), Some("8A2D"));
        assert_eq!(err.host_id.as_deref(), Some("c2lnbmF0dXJl"));
        assert!(!err.retryable);
        assert!(err.to_string().contains("NoSuchBucket"));
        Ok(())
    }

    #[test]
    fn test_should_flag_server_errors_retryable() -> anyhow::Result<()> {
        let client = default_client();
        let params = RequestParams::object("bucket", "k");

        let reply = response(503, &[], b"<Error><Code>SlowDown</Code><Message>Please reduce your request rate.</Message></Error>")?;
        let (_, outcome) = exchange(&client, S3Operation::PutObject, &params, &reply)?;
        assert!(outcome.error().is_some_and(|e| e.retryable));

        let reply = response(500, &[], b"")?;
        let (_, outcome) = exchange(&client, S3Operation::PutObject, &params, &reply)?;
        let err = outcome.error().expect("error outcome");
        assert_eq!(err.code, S3ErrorCode::Status(500));
        assert!(err.retryable);
        Ok(())
    }

    #[test]
    fn test_should_surface_redirect_region() -> anyhow::Result<()> {
        let body = b"<Error><Code>PermanentRedirect</Code><Message>The bucket you are attempting to access must be addressed using the specified endpoint.</Message></Error>";
        let reply = response(301, &[("x-amz-bucket-region", "eu-central-1")], body)?;
        let (_, outcome) = exchange(
            &default_client(),
            S3Operation::GetObject,
            &RequestParams::object("bucket", "k"),
            &reply,
        )?;
        let err = outcome.error().expect("error outcome");
        assert_eq!(err.code, S3ErrorCode::PermanentRedirect);
        assert_eq!(err.region.as_deref(), Some("eu-central-1"));
        Ok(())
    }

    #[test]
    fn test_should_classify_proxy_error_page_by_status() -> anyhow::Result<()> {
        let reply = response(502, &[("content-type", "text/html")], b"<html><body>Bad Gateway</body></html>")?;
        let (_, outcome) = exchange(
            &default_client(),
            S3Operation::ListBuckets,
            &RequestParams::new(),
            &reply,
        )?;
        let err = outcome.error().expect("error outcome");
        assert_eq!(err.code, S3ErrorCode::Status(502));
        assert!(err.retryable);
        Ok(())
    }
}
