//! Appointment form -> prefilled messaging deep link.

/// Values of one form submission. Empty single-valued fields count as missing;
/// `tests` keeps every submitted value, empty ones included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub department: Option<String>,
    pub visit_type: Option<String>,
    pub priority: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub symptoms: Option<String>,
    pub tests: Vec<String>,
    pub notes: Option<String>,
}

impl AppointmentRequest {
    /// Build from `(name, value)` pairs in document order, the way `FormData`
    /// iterates. Single-valued fields keep their first value; `tests` keeps all.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut req = AppointmentRequest::default();
        for (name, value) in fields {
            let value: String = value.into();
            let slot = match name.as_ref() {
                "tests" => {
                    req.tests.push(value);
                    continue;
                }
                "fullName" => &mut req.full_name,
                "phone" => &mut req.phone,
                "email" => &mut req.email,
                "age" => &mut req.age,
                "gender" => &mut req.gender,
                "department" => &mut req.department,
                "visitType" => &mut req.visit_type,
                "priority" => &mut req.priority,
                "date" => &mut req.date,
                "time" => &mut req.time,
                "symptoms" => &mut req.symptoms,
                "notes" => &mut req.notes,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        req
    }

    /// Fixed multi-line message template.
    pub fn compose_message(&self, hospital: &str) -> String {
        let tests = if self.tests.is_empty() {
            "-".to_string()
        } else {
            self.tests.join(", ")
        };

        [
            format!("🩺 {hospital} - Appointment Request"),
            String::new(),
            format!("Name: {}", or_empty(&self.full_name)),
            format!("Phone: {}", or_empty(&self.phone)),
            format!("Email: {}", or_dash(&self.email)),
            format!("Age: {}", or_empty(&self.age)),
            format!("Gender: {}", or_empty(&self.gender)),
            String::new(),
            format!("Department: {}", or_empty(&self.department)),
            format!("Visit Type: {}", or_empty(&self.visit_type)),
            format!("Priority: {}", or_empty(&self.priority)),
            format!("Preferred Date: {}", or_empty(&self.date)),
            format!("Preferred Time: {}", or_empty(&self.time)),
            String::new(),
            "Symptoms/Issue:".to_string(),
            or_empty(&self.symptoms).to_string(),
            String::new(),
            format!("Diagnosis/Tests: {tests}"),
            String::new(),
            format!("Additional Notes: {}", or_dash(&self.notes)),
            String::new(),
            format!("Sent from {hospital} website."),
        ]
        .join("\n")
    }
}

fn or_empty(v: &Option<String>) -> &str {
    v.as_deref().filter(|s| !s.is_empty()).unwrap_or("")
}

fn or_dash(v: &Option<String>) -> &str {
    v.as_deref().filter(|s| !s.is_empty()).unwrap_or("-")
}

/// Percent-encode like `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` becomes `%XX` of its UTF-8 bytes.
pub fn encode_uri_component(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}

/// `{base}/{phone_id}?text={encoded message}`.
pub fn message_link(base: &str, phone_id: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        base.trim_end_matches('/'),
        phone_id,
        encode_uri_component(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> AppointmentRequest {
        AppointmentRequest::from_fields([
            ("fullName", "Jane Doe"),
            ("phone", "555"),
            ("email", ""),
            ("tests", "Blood Test"),
            ("tests", "X-Ray"),
            ("notes", ""),
        ])
    }

    #[test]
    fn reads_fields_in_form_order() {
        let req = jane();
        assert_eq!(req.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(req.phone.as_deref(), Some("555"));
        assert_eq!(req.tests, vec!["Blood Test", "X-Ray"]);
        assert_eq!(req.department, None);
    }

    #[test]
    fn first_value_wins_for_single_fields() {
        let req = AppointmentRequest::from_fields([("phone", "1"), ("phone", "2"), ("other", "x")]);
        assert_eq!(req.phone.as_deref(), Some("1"));
    }

    #[test]
    fn message_uses_placeholders_for_missing_fields() {
        let msg = jane().compose_message("City Hospital");
        let lines: Vec<&str> = msg.lines().collect();

        assert_eq!(lines[0], "🩺 City Hospital - Appointment Request");
        assert_eq!(lines[1], "");
        assert!(msg.contains("Name: Jane Doe\n"));
        assert!(msg.contains("Phone: 555\n"));
        assert!(msg.contains("Email: -\n"));
        assert!(msg.contains("Age: \n"));
        assert!(msg.contains("Department: \n"));
        assert!(msg.contains("Diagnosis/Tests: Blood Test, X-Ray\n"));
        assert!(msg.contains("Additional Notes: -\n"));
        assert!(msg.ends_with("Sent from City Hospital website."));
        assert_eq!(msg.split('\n').count(), 22);
    }

    #[test]
    fn empty_test_values_are_kept() {
        let req = AppointmentRequest::from_fields([("tests", ""), ("tests", "ECG")]);
        assert_eq!(req.tests, vec!["", "ECG"]);
        let msg = req.compose_message("City Hospital");
        assert!(msg.contains("Diagnosis/Tests: , ECG\n"));
    }

    #[test]
    fn no_tests_renders_dash() {
        let msg = AppointmentRequest::default().compose_message("City Hospital");
        assert!(msg.contains("Diagnosis/Tests: -\n"));
        assert!(msg.contains("Symptoms/Issue:\n\n"));
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("Test-_.!~*'()"), "Test-_.!~*'()");
        assert_eq!(encode_uri_component("x\ny"), "x%0Ay");
        assert_eq!(encode_uri_component("/?#+,"), "%2F%3F%23%2B%2C");
        assert_eq!(encode_uri_component("🩺"), "%F0%9F%A9%BA");
    }

    #[test]
    fn link_targets_messaging_service() {
        let msg = jane().compose_message("City Hospital");
        let link = message_link("https://wa.me/", "918605463560", &msg);
        assert!(link.starts_with("https://wa.me/918605463560?text="));
        assert!(link.contains("Name%3A%20Jane%20Doe"));
        assert!(link.contains("Blood%20Test%2C%20X-Ray"));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }
}
