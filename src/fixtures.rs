//! Fixture payloads and route table
//!
//! Every response body the server can produce lives here as a `&'static [u8]`.
//! The table is fixed at compile time and looked up by exact path equality.

/// One entry of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    /// Request path, matched exactly
    pub path: &'static str,
    /// Value of the `Content-Type` header
    pub content_type: &'static str,
    /// Human readable name, shown in the startup banner
    pub label: &'static str,
    /// Response body, written as-is
    pub body: &'static [u8],
}

/// Index page linking to every binary endpoint
pub const INDEX_HTML: &[u8] = br#"<!DOCTYPE html>
<html>
<head><title>Binary Test Server</title></head>
<body>
    <h1>Binary Content Test Server</h1>
    <p>Test the following binary endpoints:</p>
    <ul>
        <li><a href="/image.png">PNG Image</a> (image/png)</li>
        <li><a href="/image.jpg">JPEG Image</a> (image/jpeg)</li>
        <li><a href="/document.pdf">PDF Document</a> (application/pdf)</li>
        <li><a href="/archive.zip">ZIP Archive</a> (application/zip)</li>
    </ul>
    <p>Each endpoint will return a minimal valid binary file of that type.</p>
</body>
</html>"#;

/// 1x1 red pixel PNG (signature, IHDR, IDAT, IEND)
pub const PNG_1X1: [u8; 69] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // width, height
    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, //
    0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, // IDAT
    0x54, 0x08, 0xD7, 0x63, 0xF8, 0xCF, 0xC0, 0x00, //
    0x00, 0x03, 0x01, 0x01, 0x00, 0x18, 0xDD, 0x8D, //
    0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, // IEND
    0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// 1x1 baseline JPEG (SOI, APP0/JFIF, DQT, SOF0, DHT x2, SOS, EOI)
pub const JPEG_1X1: [u8; 160] = [
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, //
    0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00, 0x01, //
    0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, //
    0x00, 0x08, 0x06, 0x06, 0x07, 0x06, 0x05, 0x08, //
    0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, //
    0x14, 0x0D, 0x0C, 0x0B, 0x0B, 0x0C, 0x19, 0x12, //
    0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, //
    0x1A, 0x1C, 0x1C, 0x20, 0x24, 0x2E, 0x27, 0x20, //
    0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, //
    0x2C, 0x30, 0x31, 0x34, 0x34, 0x34, 0x1F, 0x27, //
    0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, //
    0x32, 0xFF, 0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, //
    0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, //
    0x00, 0x14, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x03, 0xFF, 0xC4, 0x00, 0x14, //
    0x10, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, //
    0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0xFF, 0xD9,
];

/// Single blank letter-size page
pub const PDF_BLANK_PAGE: &[u8] = b"%PDF-1.4
1 0 obj<</Type/Catalog/Pages 2 0 R>>endobj
2 0 obj<</Type/Pages/Count 1/Kids[3 0 R]>>endobj
3 0 obj<</Type/Page/MediaBox[0 0 612 792]/Parent 2 0 R/Resources<<>>>>endobj
xref
0 4
0000000000 65535 f
0000000009 00000 n
0000000052 00000 n
0000000101 00000 n
trailer<</Size 4/Root 1 0 R>>
startxref
185
%%EOF";

/// Empty archive: a lone End-Of-Central-Directory record
pub const ZIP_EMPTY: [u8; 22] = [
    0x50, 0x4B, 0x05, 0x06, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// The route table, in banner order
pub static ROUTES: [Fixture; 5] = [
    Fixture {
        path: "/",
        content_type: "text/html; charset=utf-8",
        label: "Index page",
        body: INDEX_HTML,
    },
    Fixture {
        path: "/image.png",
        content_type: "image/png",
        label: "PNG image",
        body: &PNG_1X1,
    },
    Fixture {
        path: "/image.jpg",
        content_type: "image/jpeg",
        label: "JPEG image",
        body: &JPEG_1X1,
    },
    Fixture {
        path: "/document.pdf",
        content_type: "application/pdf",
        label: "PDF document",
        body: PDF_BLANK_PAGE,
    },
    Fixture {
        path: "/archive.zip",
        content_type: "application/zip",
        label: "ZIP archive",
        body: &ZIP_EMPTY,
    },
];

/// Find the fixture served at `path`
pub fn lookup(path: &str) -> Option<&'static Fixture> {
    ROUTES.iter().find(|fixture| fixture.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn be_u32(bytes: &[u8]) -> u32 {
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[test]
    fn test_lookup_exact_match() {
        assert_eq!(lookup("/image.png").map(|f| f.content_type), Some("image/png"));
        assert_eq!(lookup("/").map(|f| f.label), Some("Index page"));
        assert!(lookup("/image.png/").is_none());
        assert!(lookup("/IMAGE.PNG").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("/nonexistent").is_none());
    }

    #[test]
    fn test_paths_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_png_is_1x1_and_ends_with_iend() {
        assert_eq!(PNG_1X1.len(), 69);
        assert_eq!(&PNG_1X1[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

        // IHDR must be the first chunk
        assert_eq!(be_u32(&PNG_1X1[8..]), 13);
        assert_eq!(&PNG_1X1[12..16], b"IHDR");
        assert_eq!(be_u32(&PNG_1X1[16..]), 1, "width");
        assert_eq!(be_u32(&PNG_1X1[20..]), 1, "height");

        let mut offset = 8;
        let mut chunk_types = Vec::new();
        while offset < PNG_1X1.len() {
            let len = be_u32(&PNG_1X1[offset..]) as usize;
            chunk_types.push(&PNG_1X1[offset + 4..offset + 8]);
            // length + type + data + crc
            offset += 12 + len;
        }
        assert_eq!(offset, PNG_1X1.len());
        assert_eq!(chunk_types, vec![&b"IHDR"[..], &b"IDAT"[..], &b"IEND"[..]]);
    }

    #[test]
    fn test_jpeg_markers() {
        assert_eq!(&JPEG_1X1[..2], &[0xFF, 0xD8]);
        assert_eq!(&JPEG_1X1[JPEG_1X1.len() - 2..], &[0xFF, 0xD9]);
        assert_eq!(&JPEG_1X1[6..11], b"JFIF\0");
    }

    #[test]
    fn test_pdf_header_and_trailer() {
        assert!(PDF_BLANK_PAGE.starts_with(b"%PDF-1.4\n"));
        assert!(PDF_BLANK_PAGE.ends_with(b"%%EOF"));
        let text = std::str::from_utf8(PDF_BLANK_PAGE).unwrap();
        assert!(text.contains("/Type/Page/MediaBox[0 0 612 792]"));
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn test_zip_is_bare_eocd() {
        assert_eq!(ZIP_EMPTY.len(), 22);
        assert_eq!(&ZIP_EMPTY[..4], &[0x50, 0x4B, 0x05, 0x06]);
        assert!(ZIP_EMPTY[4..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_index_links_every_binary_route() {
        let html = std::str::from_utf8(INDEX_HTML).unwrap();
        for fixture in ROUTES.iter().filter(|f| f.path != "/") {
            assert!(html.contains(fixture.path), "missing link to {}", fixture.path);
        }
    }
}
