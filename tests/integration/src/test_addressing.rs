//! Addressing-style and escaping integration tests.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use s3wire_core::RequestParams;
    use s3wire_model::{ClientConfig, S3Operation};

    use crate::{client, default_client};

    #[test]
    fn test_should_virtual_host_simple_bucket() -> anyhow::Result<()> {
        let shape = default_client().build_request(
            S3Operation::GetObject,
            &RequestParams::object("bucket-name", "abc"),
        );
        let request = shape.to_http_request(Bytes::new())?;

        assert_eq!(
            request.uri().to_string(),
            "https://bucket-name.s3.amazonaws.com/abc"
        );
        assert_eq!(
            request.headers().get("host").and_then(|v| v.to_str().ok()),
            Some("bucket-name.s3.amazonaws.com")
        );
        Ok(())
    }

    #[test]
    fn test_should_path_style_dotted_bucket_only_over_tls() {
        let tls = default_client()
            .build_request(S3Operation::HeadBucket, &RequestParams::bucket("bucket.name"));
        assert_eq!(tls.hostname, "s3.amazonaws.com");
        assert_eq!(tls.path, "/bucket.name");

        let plain = client(ClientConfig::builder().ssl_enabled(false).build())
            .build_request(S3Operation::HeadBucket, &RequestParams::bucket("bucket.name"));
        assert_eq!(plain.hostname, "bucket.name.s3.amazonaws.com");
        assert_eq!(plain.path, "/");
        assert_eq!(plain.uri(), "http://bucket.name.s3.amazonaws.com/");
    }

    #[test]
    fn test_should_force_path_style_across_regions() {
        let c = client(
            ClientConfig::builder()
                .region("us-west-1")
                .force_path_style(true)
                .build(),
        );
        let shape = c.build_request(S3Operation::GetObject, &RequestParams::object("bucket", "key"));
        assert_eq!(shape.hostname, "s3-us-west-1.amazonaws.com");
        assert_eq!(shape.path, "/bucket/key");
    }

    #[test]
    fn test_should_escape_keys_and_values_end_to_end() -> anyhow::Result<()> {
        let shape = default_client().build_request(
            S3Operation::GetObject,
            &RequestParams::object("bucket", "a b c").with_param("VersionId", "a&b"),
        );
        assert_eq!(shape.path, "/a%20b%20c?versionId=a%26b");
        assert!(!shape.path.contains(' '));

        let request = shape.to_http_request(Bytes::new())?;
        assert_eq!(request.uri().path(), "/a%20b%20c");
        assert_eq!(request.uri().query(), Some("versionId=a%26b"));

        let nested = default_client()
            .build_request(S3Operation::GetObject, &RequestParams::object("bucket", "k e/y"));
        assert_eq!(nested.path, "/k%20e/y");
        Ok(())
    }

    #[test]
    fn test_should_address_list_buckets_at_service_root() {
        let shape = client(ClientConfig::builder().region("ap-southeast-2").build())
            .build_request(S3Operation::ListBuckets, &RequestParams::new());
        assert_eq!(shape.hostname, "s3-ap-southeast-2.amazonaws.com");
        assert_eq!(shape.path, "/");
        assert_eq!(shape.method, http::Method::GET);
    }

    #[test]
    fn test_should_path_style_incompatible_bucket_names() {
        for bucket in ["UPPER", "under_score", "ab", "192.168.1.1"] {
            let shape =
                default_client().build_request(S3Operation::HeadBucket, &RequestParams::bucket(bucket));
            assert_eq!(shape.hostname, "s3.amazonaws.com", "{bucket}");
            assert!(shape.path.starts_with('/'), "{bucket}");
            assert_ne!(shape.path, "/", "{bucket}");
        }
    }

    #[test]
    fn test_should_build_identical_requests_repeatedly() {
        let c = default_client();
        let params = RequestParams::object("bucket", "dir/file name.txt")
            .with_param("Range", "bytes=0-1023")
            .with_param("ResponseContentType", "text/plain; charset=utf-8");
        let first = c.build_request(S3Operation::GetObject, &params);
        let second = c.build_request(S3Operation::GetObject, &params);
        assert_eq!(first, second);
        assert_eq!(
            first.path,
            "/dir/file%20name.txt?response-content-type=text%2Fplain%3B%20charset%3Dutf-8"
        );
    }
}
