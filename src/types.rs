//! Typed request payloads

use serde::Serialize;

/// Payload for [`create_album`](crate::VimeoClient::create_album)
///
/// Optional fields are serialized as JSON `null`, which the API treats as
/// unset.
#[derive(Debug, Clone, Serialize)]
pub struct NewAlbum {
    /// The album title
    pub name: String,
    /// The album description
    pub description: String,
    /// The album's privacy level (`anybody`, `password`)
    pub privacy: Option<String>,
    /// Required when `privacy` is `password`
    pub password: Option<String>,
    /// Default sort order of the album's videos (`arranged`, `newest`,
    /// `oldest`, `plays`, `comments`, `likes`, `added_first`, `added_last`,
    /// `alphabetical`)
    pub sort: Option<String>,
}

impl NewAlbum {
    /// An album with only the required fields set
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            privacy: None,
            password: None,
            sort: None,
        }
    }
}

/// Payload for [`post_video`](crate::VimeoClient::post_video)
#[derive(Debug, Clone, Serialize)]
pub struct NewVideo {
    /// Upload approach; the catalog only issues `POST`-style uploads
    #[serde(rename = "type")]
    pub kind: String,
    /// App redirect URL
    pub redirect_url: String,
    /// Upload target; must stay valid for at least 24 hours
    pub upload_url: String,
}

impl NewVideo {
    /// A POST-style upload payload
    pub fn post(redirect_url: impl Into<String>, upload_url: impl Into<String>) -> Self {
        Self {
            kind: "POST".to_string(),
            redirect_url: redirect_url.into(),
            upload_url: upload_url.into(),
        }
    }
}
