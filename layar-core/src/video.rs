//! Video-id extraction for the `sinopsisUrl` field, which may carry either a
//! trailer (video-sharing URL) or a plain external synopsis link. A link is a
//! trailer exactly when an id can be extracted from it.

use url::Url;

/// Pulls the video id out of a YouTube URL: the path component for the
/// `youtu.be` short-link domain, the `v` query parameter for `youtube.com`.
/// Any parse failure or unrecognized host yields `None`, never an error.
pub fn extract_video_id(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?;

    if host.contains("youtu.be") {
        let id = url.path().trim_start_matches('/');
        return (!id.is_empty()).then(|| id.to_string());
    }
    if host.contains("youtube.com") {
        return url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty());
    }
    None
}
