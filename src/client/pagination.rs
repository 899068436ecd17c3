use super::HEADER_LINK;
use serde::Serialize;
use url::Url;

/// Represents `Pagination` information from a Github API request
#[derive(Debug, Default)]
pub struct Pagination {
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub first_page: Option<usize>,
    pub last_page: Option<usize>,

    pub next_page_token: Option<String>,
}

impl Pagination {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let mut pagination = Self::default();

        let links = match headers.get(HEADER_LINK).and_then(|h| h.to_str().ok()) {
            Some(links) => links,
            None => return pagination,
        };

        for link in links.split(',') {
            let segments: Vec<&str> = link.split(';').map(str::trim).collect();

            // Skip if we don't at least have href and rel
            if segments.len() < 2 {
                continue;
            }

            let href = segments[0];
            let url = match href
                .strip_prefix('<')
                .and_then(|href| href.strip_suffix('>'))
                .and_then(|href| Url::parse(href).ok())
            {
                Some(url) => url,
                None => continue,
            };

            let page = match url
                .query_pairs()
                .find_map(|(k, v)| if k == "page" { Some(v) } else { None })
            {
                Some(page) => page,
                None => continue,
            };

            for rel in &segments[1..] {
                match *rel {
                    "rel=\"next\"" => match page.parse() {
                        Ok(n) => pagination.next_page = Some(n),
                        Err(_) => pagination.next_page_token = Some(page.clone().into_owned()),
                    },
                    "rel=\"prev\"" => pagination.prev_page = page.parse().ok(),
                    "rel=\"first\"" => pagination.first_page = page.parse().ok(),
                    "rel=\"last\"" => pagination.last_page = page.parse().ok(),
                    _ => {}
                }
            }
        }

        pagination
    }

    pub fn is_last_page(&self) -> bool {
        self.next_page.is_none() && self.next_page_token.is_none()
    }
}

#[derive(Debug, Default, Serialize)]
pub struct PaginationOptions {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}
