//! Vendor media types and content negotiation.

use axum::http::HeaderValue;
use mime::Mime;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const APPLICATION_JSON: &str = "application/json";
pub const HATEOAS_JSON: &str = "application/vnd.marvin.hateoas+json";
pub const AUTHOR_FULL_JSON: &str = "application/vnd.marvin.author.full+json";
pub const AUTHOR_FULL_HATEOAS_JSON: &str = "application/vnd.marvin.author.full.hateoas+json";
pub const AUTHOR_FRIENDLY_JSON: &str = "application/vnd.marvin.author.friendly+json";
pub const AUTHOR_FRIENDLY_HATEOAS_JSON: &str =
    "application/vnd.marvin.author.friendly.hateoas+json";
pub const AUTHOR_FOR_CREATION_JSON: &str = "application/vnd.marvin.authorforcreation+json";
pub const AUTHOR_FOR_CREATION_WITH_DATE_OF_DEATH_JSON: &str =
    "application/vnd.marvin.authorforcreationwithdateofdeath+json";

const HATEOAS_MARKER: &str = "hateoas";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorRepresentation {
    Friendly,
    Full,
}

/// Outcome of negotiating the `Accept` header of a single author request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorMediaType {
    pub representation: AuthorRepresentation,
    pub include_links: bool,
    pub content_type: String,
}

impl Default for AuthorMediaType {
    fn default() -> Self {
        Self {
            representation: AuthorRepresentation::Friendly,
            include_links: false,
            content_type: APPLICATION_JSON.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorCreationMediaType {
    Standard,
    WithDateOfDeath,
}

/// Parse every entry of an `Accept` header, highest quality first.
///
/// A header that does not parse at all is a client error.
fn accepted_media_types(accept: &HeaderValue) -> Result<Vec<Mime>, ApiError> {
    let raw = accept
        .to_str()
        .map_err(|_| ApiError::BadRequest("Accept header is not valid text".to_string()))?;

    let mut entries = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<Mime>()
                .map_err(|_| ApiError::BadRequest(format!("Invalid media type '{}'", entry)))
        })
        .collect::<Result<Vec<Mime>, ApiError>>()?;

    if entries.is_empty() {
        return Err(ApiError::BadRequest("Accept header is empty".to_string()));
    }

    entries.sort_by(|a, b| quality(b).total_cmp(&quality(a)));

    Ok(entries)
}

fn quality(media_type: &Mime) -> f32 {
    media_type
        .get_param("q")
        .and_then(|q| q.as_str().parse::<f32>().ok())
        .unwrap_or(1.0)
}

fn is_wildcard(media_type: &Mime) -> bool {
    media_type.type_() == mime::STAR
        || (media_type.type_() == mime::APPLICATION && media_type.subtype() == mime::STAR)
}

fn is_json(media_type: &Mime) -> bool {
    media_type.type_() == mime::APPLICATION
        && (media_type.subtype() == mime::JSON || media_type.suffix() == Some(mime::JSON))
}

fn negotiate_single(media_type: &Mime) -> Option<AuthorMediaType> {
    if is_wildcard(media_type) {
        return Some(AuthorMediaType::default());
    }

    if !is_json(media_type) {
        return None;
    }

    if media_type.subtype() == mime::JSON {
        return Some(AuthorMediaType::default());
    }

    let subtype = media_type.subtype().as_str();
    let include_links = subtype.to_ascii_lowercase().ends_with(HATEOAS_MARKER);
    let primary = if include_links {
        subtype[..subtype.len() - HATEOAS_MARKER.len()].trim_end_matches('.')
    } else {
        subtype
    };

    let representation = match primary.to_ascii_lowercase().as_str() {
        "vnd.marvin.author.full" => AuthorRepresentation::Full,
        "vnd.marvin.author.friendly" | "vnd.marvin" => AuthorRepresentation::Friendly,
        _ => return None,
    };

    Some(AuthorMediaType {
        representation,
        include_links,
        content_type: media_type.essence_str().to_string(),
    })
}

/// Choose the author representation requested by `Accept`.
///
/// A missing header means plain JSON. An unparseable header is a 400, a header
/// naming only unsupported types is a 406.
pub fn negotiate_author(accept: Option<&HeaderValue>) -> Result<AuthorMediaType, ApiError> {
    let Some(accept) = accept else {
        return Ok(AuthorMediaType::default());
    };

    accepted_media_types(accept)?
        .iter()
        .find_map(negotiate_single)
        .ok_or_else(|| ApiError::NotAcceptable("None of the requested media types is supported".to_string()))
}

/// Whether the client asked for the link-augmented collection envelope.
pub fn wants_hateoas(accept: Option<&HeaderValue>) -> Result<bool, ApiError> {
    match accept {
        None => Ok(false),
        Some(accept) => Ok(accepted_media_types(accept)?
            .iter()
            .any(|media_type| media_type.essence_str().eq_ignore_ascii_case(HATEOAS_JSON))),
    }
}

/// Select the author creation payload from `Content-Type`.
pub fn negotiate_author_creation(
    content_type: Option<&HeaderValue>,
) -> Result<AuthorCreationMediaType, ApiError> {
    let unsupported =
        || ApiError::UnsupportedMediaType("Unsupported author creation media type".to_string());

    let media_type = content_type
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Mime>().ok())
        .ok_or_else(unsupported)?;

    match media_type.essence_str().to_ascii_lowercase().as_str() {
        APPLICATION_JSON | AUTHOR_FOR_CREATION_JSON => Ok(AuthorCreationMediaType::Standard),
        AUTHOR_FOR_CREATION_WITH_DATE_OF_DEATH_JSON => Ok(AuthorCreationMediaType::WithDateOfDeath),
        _ => Err(unsupported()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(value: &'static str) -> HeaderValue {
        HeaderValue::from_static(value)
    }

    #[test]
    fn test_missing_accept_is_friendly_json() {
        assert_eq!(negotiate_author(None).unwrap(), AuthorMediaType::default());
    }

    #[test]
    fn test_full_hateoas_representation() {
        let media = negotiate_author(Some(&header(AUTHOR_FULL_HATEOAS_JSON))).unwrap();

        assert_eq!(media.representation, AuthorRepresentation::Full);
        assert!(media.include_links);
        assert_eq!(media.content_type, AUTHOR_FULL_HATEOAS_JSON);
    }

    #[test]
    fn test_generic_hateoas_is_friendly_with_links() {
        let media = negotiate_author(Some(&header(HATEOAS_JSON))).unwrap();

        assert_eq!(media.representation, AuthorRepresentation::Friendly);
        assert!(media.include_links);
    }

    #[test]
    fn test_quality_orders_candidates() {
        let media = negotiate_author(Some(&header(
            "application/vnd.marvin.author.friendly+json;q=0.5, application/vnd.marvin.author.full+json",
        )))
        .unwrap();

        assert_eq!(media.representation, AuthorRepresentation::Full);
        assert!(!media.include_links);
    }

    #[test]
    fn test_unsupported_and_invalid_accept() {
        assert!(matches!(
            negotiate_author(Some(&header("text/html"))),
            Err(ApiError::NotAcceptable(_))
        ));
        assert!(matches!(
            negotiate_author(Some(&header("not a media type"))),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_wants_hateoas() {
        assert!(wants_hateoas(Some(&header(HATEOAS_JSON))).unwrap());
        assert!(!wants_hateoas(Some(&header(APPLICATION_JSON))).unwrap());
        assert!(!wants_hateoas(None).unwrap());
    }

    #[test]
    fn test_author_creation_content_types() {
        assert_eq!(
            negotiate_author_creation(Some(&header("application/json; charset=utf-8"))).unwrap(),
            AuthorCreationMediaType::Standard
        );
        assert_eq!(
            negotiate_author_creation(Some(&header(AUTHOR_FOR_CREATION_WITH_DATE_OF_DEATH_JSON)))
                .unwrap(),
            AuthorCreationMediaType::WithDateOfDeath
        );
        assert!(matches!(
            negotiate_author_creation(Some(&header("text/plain"))),
            Err(ApiError::UnsupportedMediaType(_))
        ));
        assert!(matches!(
            negotiate_author_creation(None),
            Err(ApiError::UnsupportedMediaType(_))
        ));
    }
}
