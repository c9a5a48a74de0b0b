//! Bucket and listing integration tests.

#[cfg(test)]
mod tests {
    use s3wire_core::RequestParams;
    use s3wire_model::S3Operation;

    use crate::{default_client, exchange, response};

    #[test]
    fn test_should_list_buckets() -> anyhow::Result<()> {
        let reply = response(
            200,
            &[("x-amz-request-id", "RLB")],
            br#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Owner><ID>bcaf1ffd86f41161ca5fb16fd081034f</ID><DisplayName>webfile</DisplayName></Owner>
  <Buckets>
    <Bucket><Name>quotes</Name><CreationDate>2006-02-03T16:45:09.000Z</CreationDate></Bucket>
    <Bucket><Name>samples</Name><CreationDate>2006-02-03T16:41:58.000Z</CreationDate></Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#,
        )?;
        let (shape, outcome) = exchange(
            &default_client(),
            S3Operation::ListBuckets,
            &RequestParams::new(),
            &reply,
        )?;
        assert_eq!(shape.uri(), "https://s3.amazonaws.com/");

        let ok = outcome.into_result()?;
        assert_eq!(ok.get_str("OwnerId"), Some("bcaf1ffd86f41161ca5fb16fd081034f"));
        let buckets = ok.get_records("Buckets").expect("buckets");
        let names: Vec<_> = buckets
            .iter()
            .filter_map(|b| b.get("Name").map(String::as_str))
            .collect();
        assert_eq!(names, vec!["quotes", "samples"]);
        assert_eq!(ok.request_id(), Some("RLB"));
        Ok(())
    }

    #[test]
    fn test_should_list_objects_v2_page() -> anyhow::Result<()> {
        let reply = response(
            200,
            &[],
            br#"<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>bucket</Name>
  <Prefix>photos/</Prefix>
  <KeyCount>1</KeyCount>
  <MaxKeys>1</MaxKeys>
  <Delimiter>/</Delimiter>
  <IsTruncated>true</IsTruncated>
  <NextContinuationToken>1ueGcxLPRx1Tr/XYExHnhbYLgveDs2J/wm36Hy4vbOwM=</NextContinuationToken>
  <Contents>
    <Key>photos/a &amp; b.jpg</Key>
    <LastModified>2024-05-01T12:00:00.000Z</LastModified>
    <ETag>&quot;abc&quot;</ETag>
    <Size>42</Size>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
</ListBucketResult>"#,
        )?;
        let (shape, outcome) = exchange(
            &default_client(),
            S3Operation::ListObjectsV2,
            &RequestParams::bucket("bucket")
                .with_param("Prefix", "photos/")
                .with_param("Delimiter", "/")
                .with_param("MaxKeys", "1"),
            &reply,
        )?;
        assert_eq!(shape.hostname, "bucket.s3.amazonaws.com");
        assert_eq!(
            shape.path,
            "/?list-type=2&delimiter=%2F&max-keys=1&prefix=photos%2F"
        );

        let ok = outcome.into_result()?;
        assert_eq!(ok.get_bool("IsTruncated"), Some(true));
        assert_eq!(ok.get_i64("KeyCount"), Some(1));
        assert_eq!(
            ok.get_str("NextContinuationToken"),
            Some("1ueGcxLPRx1Tr/XYExHnhbYLgveDs2J/wm36Hy4vbOwM=")
        );
        let contents = ok.get_records("Contents").expect("contents");
        assert_eq!(
            contents[0].get("Key").map(String::as_str),
            Some("photos/a & b.jpg")
        );
        assert_eq!(contents[0].get("ETag").map(String::as_str), Some("\"abc\""));
        Ok(())
    }

    #[test]
    fn test_should_report_empty_bucket_as_not_truncated() -> anyhow::Result<()> {
        let reply = response(
            200,
            &[],
            b"<ListBucketResult><Name>empty</Name><Prefix></Prefix><Marker></Marker><MaxKeys>1000</MaxKeys></ListBucketResult>",
        )?;
        let (_, outcome) = exchange(
            &default_client(),
            S3Operation::ListObjects,
            &RequestParams::bucket("empty"),
            &reply,
        )?;
        let ok = outcome.into_result()?;
        assert_eq!(ok.get_bool("IsTruncated"), Some(false));
        assert!(ok.get("Prefix").is_none());
        assert!(ok.get("Marker").is_none());
        assert!(ok.get("Contents").is_none());
        Ok(())
    }

    #[test]
    fn test_should_read_bucket_location() -> anyhow::Result<()> {
        let client = default_client();

        let reply = response(
            200,
            &[("x-amz-request-id", "RLOC")],
            br#"<?xml version="1.0" encoding="UTF-8"?>
<LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/"/>"#,
        )?;
        let (shape, outcome) = exchange(
            &client,
            S3Operation::GetBucketLocation,
            &RequestParams::bucket("bucket"),
            &reply,
        )?;
        assert_eq!(shape.path, "/?location");
        let ok = outcome.into_result()?;
        assert_eq!(ok.len(), 1);
        assert_eq!(ok.request_id(), Some("RLOC"));

        let reply = response(
            200,
            &[],
            b"<LocationConstraint>us-west-1</LocationConstraint>",
        )?;
        let (_, outcome) = exchange(
            &client,
            S3Operation::GetBucketLocation,
            &RequestParams::bucket("bucket"),
            &reply,
        )?;
        assert_eq!(
            outcome.into_result()?.get_str("LocationConstraint"),
            Some("us-west-1")
        );
        Ok(())
    }

    #[test]
    fn test_should_list_object_versions() -> anyhow::Result<()> {
        let reply = response(
            200,
            &[],
            b"<ListVersionsResult><Name>bucket</Name><IsTruncated>false</IsTruncated><Version><Key>k</Key><VersionId>v2</VersionId><IsLatest>true</IsLatest></Version><DeleteMarker><Key>k</Key><VersionId>v3</VersionId></DeleteMarker></ListVersionsResult>",
        )?;
        let (shape, outcome) = exchange(
            &default_client(),
            S3Operation::ListObjectVersions,
            &RequestParams::bucket("bucket").with_param("KeyMarker", "k"),
            &reply,
        )?;
        assert_eq!(shape.path, "/?versions&key-marker=k");
        let ok = outcome.into_result()?;
        assert_eq!(
            ok.get_records("Versions").map(<[_]>::len),
            Some(1)
        );
        assert_eq!(
            ok.get_records("DeleteMarkers")
                .and_then(|m| m[0].get("VersionId"))
                .map(String::as_str),
            Some("v3")
        );
        Ok(())
    }

    #[test]
    fn test_should_read_versioning_status() -> anyhow::Result<()> {
        let reply = response(
            200,
            &[],
            b"<VersioningConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\"><Status>Enabled</Status></VersioningConfiguration>",
        )?;
        let (shape, outcome) = exchange(
            &default_client(),
            S3Operation::GetBucketVersioning,
            &RequestParams::bucket("bucket"),
            &reply,
        )?;
        assert_eq!(shape.path, "/?versioning");
        let ok = outcome.into_result()?;
        assert_eq!(ok.get_str("Status"), Some("Enabled"));
        assert!(ok.get("MfaDelete").is_none());
        Ok(())
    }
}
