//! Operations the client can address and decode.

/// All supported S3 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum S3Operation {
    /// The ListBuckets operation.
    ListBuckets,
    /// The CreateBucket operation.
    CreateBucket,
    /// The DeleteBucket operation.
    DeleteBucket,
    /// The HeadBucket operation.
    HeadBucket,
    /// The GetBucketLocation operation.
    GetBucketLocation,
    /// The GetBucketVersioning operation.
    GetBucketVersioning,
    /// The GetBucketAcl operation.
    GetBucketAcl,
    /// The ListObjects operation.
    ListObjects,
    /// The ListObjectsV2 operation.
    ListObjectsV2,
    /// The ListObjectVersions operation.
    ListObjectVersions,
    /// The PutObject operation.
    PutObject,
    /// The GetObject operation.
    GetObject,
    /// The HeadObject operation.
    HeadObject,
    /// The DeleteObject operation.
    DeleteObject,
    /// The CopyObject operation.
    CopyObject,
    /// The GetObjectAcl operation.
    GetObjectAcl,
    /// The GetObjectTagging operation.
    GetObjectTagging,
    /// The DeleteObjectTagging operation.
    DeleteObjectTagging,
    /// The CreateMultipartUpload operation.
    CreateMultipartUpload,
    /// The UploadPart operation.
    UploadPart,
    /// The CompleteMultipartUpload operation.
    CompleteMultipartUpload,
    /// The AbortMultipartUpload operation.
    AbortMultipartUpload,
    /// The ListParts operation.
    ListParts,
    /// The ListMultipartUploads operation.
    ListMultipartUploads,
}

impl S3Operation {
    /// Every supported operation, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::ListBuckets,
        Self::CreateBucket,
        Self::DeleteBucket,
        Self::HeadBucket,
        Self::GetBucketLocation,
        Self::GetBucketVersioning,
        Self::GetBucketAcl,
        Self::ListObjects,
        Self::ListObjectsV2,
        Self::ListObjectVersions,
        Self::PutObject,
        Self::GetObject,
        Self::HeadObject,
        Self::DeleteObject,
        Self::CopyObject,
        Self::GetObjectAcl,
        Self::GetObjectTagging,
        Self::DeleteObjectTagging,
        Self::CreateMultipartUpload,
        Self::UploadPart,
        Self::CompleteMultipartUpload,
        Self::AbortMultipartUpload,
        Self::ListParts,
        Self::ListMultipartUploads,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListBuckets => "ListBuckets",
            Self::CreateBucket => "CreateBucket",
            Self::DeleteBucket => "DeleteBucket",
            Self::HeadBucket => "HeadBucket",
            Self::GetBucketLocation => "GetBucketLocation",
            Self::GetBucketVersioning => "GetBucketVersioning",
            Self::GetBucketAcl => "GetBucketAcl",
            Self::ListObjects => "ListObjects",
            Self::ListObjectsV2 => "ListObjectsV2",
            Self::ListObjectVersions => "ListObjectVersions",
            Self::PutObject => "PutObject",
            Self::GetObject => "GetObject",
            Self::HeadObject => "HeadObject",
            Self::DeleteObject => "DeleteObject",
            Self::CopyObject => "CopyObject",
            Self::GetObjectAcl => "GetObjectAcl",
            Self::GetObjectTagging => "GetObjectTagging",
            Self::DeleteObjectTagging => "DeleteObjectTagging",
            Self::CreateMultipartUpload => "CreateMultipartUpload",
            Self::UploadPart => "UploadPart",
            Self::CompleteMultipartUpload => "CompleteMultipartUpload",
            Self::AbortMultipartUpload => "AbortMultipartUpload",
            Self::ListParts => "ListParts",
            Self::ListMultipartUploads => "ListMultipartUploads",
        }
    }

    /// Parse an operation name string into an S3Operation.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// HTTP method the operation is sent with.
    #[must_use]
    pub fn http_method(&self) -> http::Method {
        match self {
            Self::ListBuckets
            | Self::GetBucketLocation
            | Self::GetBucketVersioning
            | Self::GetBucketAcl
            | Self::ListObjects
            | Self::ListObjectsV2
            | Self::ListObjectVersions
            | Self::GetObject
            | Self::GetObjectAcl
            | Self::GetObjectTagging
            | Self::ListParts
            | Self::ListMultipartUploads => http::Method::GET,
            Self::HeadBucket | Self::HeadObject => http::Method::HEAD,
            Self::CreateBucket | Self::PutObject | Self::CopyObject | Self::UploadPart => {
                http::Method::PUT
            }
            Self::CreateMultipartUpload | Self::CompleteMultipartUpload => http::Method::POST,
            Self::DeleteBucket
            | Self::DeleteObject
            | Self::DeleteObjectTagging
            | Self::AbortMultipartUpload => http::Method::DELETE,
        }
    }
}

impl std::fmt::Display for S3Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
