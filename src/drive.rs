use regex::Regex;
use std::sync::OnceLock;

static DRIVE_RE: OnceLock<Regex> = OnceLock::new();

fn drive_re() -> &'static Regex {
    DRIVE_RE.get_or_init(|| {
        Regex::new(r"drive\.google\.com/file/d/([A-Za-z0-9_-]+)")
            .expect("drive link pattern")
    })
}

/// Mirrors the conversion the app applies before storing a wallpaper URL,
/// so the DOM check knows what value to expect.
///
/// Google Drive share links ("file/d/<ID>/view...") become direct-view
/// links ("uc?export=view&id=<ID>"). Dropbox share links get their
/// download flag flipped. Everything else passes through unchanged.
pub fn convert_to_direct_link(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    if let Some(caps) = drive_re().captures(url) {
        return format!("https://drive.google.com/uc?export=view&id={}", &caps[1]);
    }

    if url.contains("dropbox.com") && url.contains("?dl=0") {
        return url.replace("?dl=0", "?dl=1");
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_drive_link_maps_to_direct_view() {
        let link = "https://drive.google.com/file/d/123456789/view?usp=sharing";
        assert_eq!(
            convert_to_direct_link(link),
            "https://drive.google.com/uc?export=view&id=123456789"
        );
    }

    #[test]
    fn drive_link_without_query_converts() {
        assert_eq!(
            convert_to_direct_link("https://drive.google.com/file/d/abcDEF/view"),
            "https://drive.google.com/uc?export=view&id=abcDEF"
        );
    }

    #[test]
    fn drive_id_allows_dash_and_underscore() {
        assert_eq!(
            convert_to_direct_link("https://drive.google.com/file/d/a-b_c123/view"),
            "https://drive.google.com/uc?export=view&id=a-b_c123"
        );
    }

    #[test]
    fn dropbox_download_flag_flipped() {
        assert_eq!(
            convert_to_direct_link("https://www.dropbox.com/s/xyz/pic.jpg?dl=0"),
            "https://www.dropbox.com/s/xyz/pic.jpg?dl=1"
        );
    }

    #[test]
    fn plain_image_url_passes_through() {
        let url = "https://example.com/wallpaper.png";
        assert_eq!(convert_to_direct_link(url), url);
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(convert_to_direct_link(""), "");
    }
}
