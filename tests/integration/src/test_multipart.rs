//! Multipart upload flow integration tests.

#[cfg(test)]
mod tests {
    use s3wire_core::RequestParams;
    use s3wire_model::{S3ErrorCode, S3Operation};

    use crate::{default_client, exchange, response};

    #[test]
    fn test_should_run_multipart_upload_flow() -> anyhow::Result<()> {
        let client = default_client();

        let reply = response(
            200,
            &[("x-amz-request-id", "R-INIT")],
            b"<InitiateMultipartUploadResult><Bucket>bucket</Bucket><Key>big.bin</Key><UploadId>VXBsb2FkIElE</UploadId></InitiateMultipartUploadResult>",
        )?;
        let (shape, outcome) = exchange(
            &client,
            S3Operation::CreateMultipartUpload,
            &RequestParams::object("bucket", "big.bin").with_param("ContentType", "application/octet-stream"),
            &reply,
        )?;
        assert_eq!(shape.method, http::Method::POST);
        assert_eq!(shape.path, "/big.bin?uploads");
        assert_eq!(
            shape.headers.get("content-type").and_then(|v| v.to_str().ok()),
            Some("application/octet-stream")
        );
        let init = outcome.into_result()?;
        let upload_id = init.get_str("UploadId").expect("upload id").to_owned();
        assert_eq!(init.request_id(), Some("R-INIT"));

        let reply = response(200, &[("etag", "\"part1etag\"")], b"")?;
        let (shape, outcome) = exchange(
            &client,
            S3Operation::UploadPart,
            &RequestParams::object("bucket", "big.bin")
                .with_param("PartNumber", "1")
                .with_param("UploadId", upload_id.as_str()),
            &reply,
        )?;
        assert_eq!(shape.path, "/big.bin?partNumber=1&uploadId=VXBsb2FkIElE");
        assert_eq!(outcome.into_result()?.get_str("ETag"), Some("\"part1etag\""));

        let reply = response(
            200,
            &[("x-amz-request-id", "R-DONE")],
            br#"<?xml version="1.0" encoding="UTF-8"?>
<CompleteMultipartUploadResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Location>http://bucket.s3.amazonaws.com/big.bin</Location>
  <Bucket>bucket</Bucket>
  <Key>big.bin</Key>
  <ETag>"17fbc0a106abbb6f381aac6e331f2a19-1"</ETag>
</CompleteMultipartUploadResult>"#,
        )?;
        let (shape, outcome) = exchange(
            &client,
            S3Operation::CompleteMultipartUpload,
            &RequestParams::object("bucket", "big.bin").with_param("UploadId", upload_id.as_str()),
            &reply,
        )?;
        assert_eq!(shape.method, http::Method::POST);
        let done = outcome.into_result()?;
        assert_eq!(done.get_str("Location"), Some("http://bucket.s3.amazonaws.com/big.bin"));
        assert_eq!(done.get_str("Bucket"), Some("bucket"));
        assert_eq!(done.get_str("Key"), Some("big.bin"));
        assert_eq!(done.get_str("ETag"), Some("\"17fbc0a106abbb6f381aac6e331f2a19-1\""));
        assert_eq!(done.request_id(), Some("R-DONE"));
        Ok(())
    }

    #[test]
    fn test_should_detect_failed_completion_behind_200() -> anyhow::Result<()> {
        let body = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Error><Code>InternalError</Code><Message>We encountered an internal error. Please try again.</Message><RequestId>656c76696e6727732072657175657374</RequestId><HostId>Uuag1LuByRx9e6j5Onimru9pO4ZVKnJ2Qz7/C1NPcfTWAtRPfTaOFg==</HostId></Error>";
        assert!(s3wire_xml::parse_error_document(body).is_some());

        let reply = response(200, &[], body)?;
        let (_, outcome) = exchange(
            &default_client(),
            S3Operation::CompleteMultipartUpload,
            &RequestParams::object("bucket", "big.bin").with_param("UploadId", "u1"),
            &reply,
        )?;
        let err = outcome.error().expect("error outcome");
        assert_eq!(err.code, S3ErrorCode::InternalError);
        assert_eq!(err.status_code, 200);
        assert!(err.retryable);
        assert_eq!(err.request_id.as_deref(), Some("656c76696e6727732072657175657374"));
        Ok(())
    }

    #[test]
    fn test_should_list_parts_and_abort() -> anyhow::Result<()> {
        let client = default_client();
        let reply = response(
            200,
            &[],
            b"<ListPartsResult><Bucket>bucket</Bucket><Key>big.bin</Key><UploadId>u1</UploadId><MaxParts>2</MaxParts><NextPartNumberMarker>2</NextPartNumberMarker><IsTruncated>true</IsTruncated><Part><PartNumber>1</PartNumber><ETag>\"a\"</ETag><Size>5242880</Size></Part><Part><PartNumber>2</PartNumber><ETag>\"b\"</ETag><Size>1024</Size></Part></ListPartsResult>",
        )?;
        let (shape, outcome) = exchange(
            &client,
            S3Operation::ListParts,
            &RequestParams::object("bucket", "big.bin")
                .with_param("UploadId", "u1")
                .with_param("MaxParts", "2"),
            &reply,
        )?;
        assert_eq!(shape.path, "/big.bin?max-parts=2&uploadId=u1");
        let parts = outcome.into_result()?;
        assert_eq!(parts.get_i64("MaxParts"), Some(2));
        assert_eq!(parts.get_i64("NextPartNumberMarker"), Some(2));
        assert_eq!(parts.get_bool("IsTruncated"), Some(true));
        let records = parts.get_records("Parts").expect("parts");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("Size").map(String::as_str), Some("1024"));

        let reply = response(204, &[], b"")?;
        let (shape, outcome) = exchange(
            &client,
            S3Operation::AbortMultipartUpload,
            &RequestParams::object("bucket", "big.bin").with_param("UploadId", "u1"),
            &reply,
        )?;
        assert_eq!(shape.method, http::Method::DELETE);
        assert!(outcome.is_success());
        Ok(())
    }
}
