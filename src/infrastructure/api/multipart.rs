//! Multipart/form-data encoding for upload endpoints.

use uuid::Uuid;

/// Multipart form body builder.
///
/// Parts are framed in insertion order, which is observable on the wire and
/// kept stable so encoded bodies are reproducible.
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    /// Creates a form with a fresh random boundary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_boundary(Uuid::new_v4().to_string())
    }

    /// Creates a form with a fixed boundary.
    #[must_use]
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            body: Vec::new(),
        }
    }

    /// Returns the Content-Type header value for the whole request.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Appends a plain text field.
    pub fn add_field(&mut self, name: &str, value: &str) {
        self.append_str(&format!("--{}\r\n", self.boundary));
        self.append_str(&format!(
            "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
        ));
        self.append_str(&format!("{value}\r\n"));
    }

    /// Appends a binary file part.
    pub fn add_file(&mut self, name: &str, file_name: &str, mime_type: &str, data: &[u8]) {
        self.append_str(&format!("--{}\r\n", self.boundary));
        self.append_str(&format!(
            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
        ));
        self.append_str(&format!("Content-Type: {mime_type}\r\n\r\n"));
        self.body.extend_from_slice(data);
        self.append_str("\r\n");
    }

    /// Appends the terminating boundary and returns the finished body.
    #[must_use]
    pub fn finalize(mut self) -> Vec<u8> {
        self.append_str(&format!("--{}--\r\n", self.boundary));
        self.body
    }

    fn append_str(&mut self, text: &str) {
        self.body.extend_from_slice(text.as_bytes());
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_then_file_preserves_order_and_framing() {
        let mut form = MultipartForm::with_boundary("BOUNDARY");
        form.add_field("caption", "hello");
        form.add_file("image", "a.jpg", "image/jpeg", &[0xFF, 0xD8]);

        let mut expected: Vec<u8> = Vec::new();
        expected.extend_from_slice(
            b"--BOUNDARY\r\n\
              Content-Disposition: form-data; name=\"caption\"\r\n\r\n\
              hello\r\n\
              --BOUNDARY\r\n\
              Content-Disposition: form-data; name=\"image\"; filename=\"a.jpg\"\r\n\
              Content-Type: image/jpeg\r\n\r\n",
        );
        expected.extend_from_slice(&[0xFF, 0xD8]);
        expected.extend_from_slice(b"\r\n--BOUNDARY--\r\n");

        assert_eq!(form.finalize(), expected);
    }

    #[test]
    fn test_content_type_carries_boundary() {
        let form = MultipartForm::with_boundary("xyz");
        assert_eq!(form.content_type(), "multipart/form-data; boundary=xyz");
    }

    #[test]
    fn test_fresh_forms_use_distinct_boundaries() {
        let first = MultipartForm::new();
        let second = MultipartForm::new();
        assert_ne!(first.content_type(), second.content_type());
    }

    #[test]
    fn test_empty_form_is_just_the_terminator() {
        let form = MultipartForm::with_boundary("B");
        assert_eq!(form.finalize(), b"--B--\r\n".to_vec());
    }
}
