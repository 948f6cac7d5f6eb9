use serde_json::{json, Value};

use shared_config::AppConfig;

pub const DOCTORS_PATH: &str = "/campus-api-mock/doctors.json";

pub struct TestConfig {
    pub doctors_source_url: String,
    pub fetch_timeout_secs: u64,
    pub page_path: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            doctors_source_url: format!("http://localhost:54321{}", DOCTORS_PATH),
            fetch_timeout_secs: 5,
            page_path: "/".to_string(),
        }
    }
}

impl TestConfig {
    /// Point the source URL at a mock server base URI.
    pub fn with_source(base_uri: &str) -> Self {
        Self {
            doctors_source_url: format!("{}{}", base_uri, DOCTORS_PATH),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            doctors_source_url: self.doctors_source_url.clone(),
            fetch_timeout_secs: self.fetch_timeout_secs,
            page_path: self.page_path.clone(),
            ..AppConfig::default()
        }
    }
}

/// Raw upstream payloads, shaped like the public doctors feed.
pub struct MockDoctorResponses;

impl MockDoctorResponses {
    pub fn doctor(
        id: &str,
        name: &str,
        fees: &str,
        experience: &str,
        specialties: &[&str],
        video: bool,
        clinic: bool,
    ) -> Value {
        json!({
            "id": id,
            "name": name,
            "name_initials": name.chars().filter(|c| c.is_uppercase()).collect::<String>(),
            "photo": format!("https://doctorlistingingestionpr.s3.amazonaws.com/{}.jpg", id),
            "doctor_introduction": "",
            "specialities": specialties.iter().map(|s| json!({"name": s})).collect::<Vec<_>>(),
            "fees": fees,
            "experience": experience,
            "languages": ["English", "Hindi"],
            "clinic": {
                "name": format!("{} Clinic", name),
                "address": {
                    "locality": "Indiranagar",
                    "city": "Bangalore",
                    "address_line1": "100 Feet Road",
                    "location": "12.97,77.64",
                    "logo_url": ""
                }
            },
            "video_consult": video,
            "in_clinic": clinic
        })
    }

    /// A (₹500, 10y, Cardiology, video), B (₹300, 20y, Dermatology, clinic),
    /// C (₹300, 5y, Cardiology + Dermatology, both), in that order.
    pub fn three_doctors() -> Value {
        json!([
            Self::doctor("A", "Dr. Anita Sharma", "₹ 500", "10 Years of experience", &["Cardiology"], true, false),
            Self::doctor("B", "Dr. Bharat Mehta", "₹ 300", "20 Years of experience", &["Dermatology"], false, true),
            Self::doctor("C", "Dr. Chitra Iyer", "₹ 300", "5 Years of experience", &["Cardiology", "Dermatology"], true, true),
        ])
    }

    /// Records with missing and mistyped fields.
    pub fn malformed_doctors() -> Value {
        json!([
            {},
            {"name": "Dr. No Fees", "fees": null, "experience": "a decade"},
            {"id": 77, "specialities": "Cardiology", "clinic": "downtown", "video_consult": "yes"},
            "not even an object"
        ])
    }

    pub fn error_response(message: &str) -> Value {
        json!({
            "error": {
                "message": message
            }
        })
    }
}
