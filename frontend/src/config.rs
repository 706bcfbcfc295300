use chrono::NaiveDateTime;

const DEFAULT_ASSET_BASE_URL: &str = "https://res.cloudinary.com/dcnl1eovc/video/upload/";

pub const PUZZLE_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1024993/pexels-photo-1024993.jpeg?auto=compress&cs=tinysrgb&w=600";

// The moment everything changed
const MET_AT: &str = "2025-11-29T13:30:00";

pub fn get_asset_base_url() -> String {
    // Set ASSET_BASE_URL at build time to serve media from somewhere else
    option_env!("ASSET_BASE_URL")
        .unwrap_or(DEFAULT_ASSET_BASE_URL)
        .to_string()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        join_url(&get_asset_base_url(), path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn met_at() -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(MET_AT, "%Y-%m-%dT%H:%M:%S") {
        Ok(at) => Some(at),
        Err(e) => {
            log::error!("Invalid met date '{}': {}", MET_AT, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(get_asset_url(PUZZLE_IMAGE_URL), PUZZLE_IMAGE_URL);
    }

    #[test]
    fn test_join_url_single_slash() {
        assert_eq!(join_url("https://cdn.test/up/", "/v1/a.mp3"), "https://cdn.test/up/v1/a.mp3");
        assert_eq!(join_url("https://cdn.test/up", "v1/a.mp3"), "https://cdn.test/up/v1/a.mp3");
    }

    #[test]
    fn test_met_date_parses() {
        let at = met_at().unwrap();
        assert_eq!(at.format("%d %B %Y %H:%M").to_string(), "29 November 2025 13:30");
    }
}
