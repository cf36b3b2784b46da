//! `POST AVR` request framing around the XML control document
//!
//! The processor speaks an HTTP/1.1-shaped request over a raw socket but is
//! not an HTTP server: no status line or body ever comes back.

/// Default control port of the processor
pub const DEFAULT_PORT: u16 = 10025;

/// Client identifier the processor expects in the `User-Agent` header
pub const USER_AGENT: &str = "Harman Kardon AVR Remote Controller /2.0";

const REQUEST_LINE: &str = "POST AVR HTTP/1.1";

/// Build the XML control document for a single command
///
/// Token, zone and parameter are inserted as-is; the processor expects the
/// raw text.
pub fn build_body(zone: &str, command_token: &str, param: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <harman><avr><common><control>\n  \
         <name>{name}</name>\n  \
         <zone>{zone}</zone>\n  \
         <para>{para}</para>\n\
         </control></common></avr></harman>",
        name = command_token,
        para = param,
    )
}

/// Build the complete request (request line, headers, blank line, body)
///
/// `Content-Length` is the byte length of the UTF-8 body, so multi-byte
/// source names are counted correctly.
pub fn build_request(port: u16, zone: &str, command_token: &str, param: &str) -> String {
    let body = build_body(zone, command_token, param);
    format!(
        "{REQUEST_LINE}\r\n\
         Host: :{port}\r\n\
         User-Agent: {USER_AGENT}\r\n\
         Content-Length: {len}\r\n\
         \r\n\
         {body}",
        len = body.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn split(request: &str) -> (&str, &str) {
        request
            .split_once("\r\n\r\n")
            .expect("request must have a blank line between headers and body")
    }

    fn content_length(headers: &str) -> usize {
        headers
            .lines()
            .find_map(|l| l.strip_prefix("Content-Length: "))
            .expect("Content-Length header")
            .trim()
            .parse()
            .expect("numeric Content-Length")
    }

    #[test]
    fn test_request_headers() {
        let request = build_request(10025, "Main Zone", "power-on", "");
        let (headers, _) = split(&request);
        let lines: Vec<&str> = headers.split("\r\n").collect();

        assert_eq!(lines[0], "POST AVR HTTP/1.1");
        assert_eq!(lines[1], "Host: :10025");
        assert_eq!(lines[2], "User-Agent: Harman Kardon AVR Remote Controller /2.0");
        assert!(lines[3].starts_with("Content-Length: "));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_body_contains_command_zone_and_param() {
        let body = build_body("Main Zone", "source-selection", "Media Server");

        assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(body.contains("<name>source-selection</name>"));
        assert!(body.contains("<zone>Main Zone</zone>"));
        assert!(body.contains("<para>Media Server</para>"));
        assert!(body.contains("<harman><avr><common><control>"));
        assert!(body.ends_with("</control></common></avr></harman>"));
    }

    #[test]
    fn test_empty_param_keeps_para_element() {
        let body = build_body("Main Zone", "mute-toggle", "");
        assert!(body.contains("<para></para>"));
    }

    #[rstest]
    #[case("")]
    #[case("Disc")]
    #[case("Cable Sat")]
    #[case("Télé")]
    #[case("ラジオ")]
    fn test_content_length_is_body_bytes(#[case] param: &str) {
        let request = build_request(10025, "Main Zone", "source-selection", param);
        let (headers, body) = split(&request);

        assert_eq!(content_length(headers), body.len());
        assert_eq!(body, build_body("Main Zone", "source-selection", param));
    }

    #[test]
    fn test_multibyte_param_counts_bytes_not_chars() {
        let ascii = build_body("Main Zone", "source-selection", "Tele");
        let accented = build_body("Main Zone", "source-selection", "Télé");

        assert_eq!(accented.chars().count(), ascii.chars().count());
        assert_eq!(accented.len(), ascii.len() + 2);
    }

    #[rstest]
    #[case("R&B")]
    #[case("Kid's TV")]
    #[case("\"Live\" <Stage>")]
    fn test_param_inserted_verbatim(#[case] param: &str) {
        let body = build_body("Main Zone", "source-selection", param);
        assert!(body.contains(&format!("<para>{}</para>", param)));
    }

    #[test]
    fn test_port_in_host_header() {
        let request = build_request(4000, "Main Zone", "sleep", "");
        assert!(request.contains("\r\nHost: :4000\r\n"));
    }
}
