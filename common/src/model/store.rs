use crate::validation::{FieldKind, FieldSpec, Shape};
use serde::{Deserialize, Serialize};

/// Main branding image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub img_path: String,
}

impl Shape for Profile {
    const ENTITY: &'static str = "Profile";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::new("imgPath", FieldKind::Text)];
        FIELDS
    }
}

/// Store heading, address and contact details shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub heading: String,
    pub address: String,
    pub contact: Contact,
}

/// Both values are rendered as `tel:` and `mailto:` links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("phone", FieldKind::Phone),
    FieldSpec::new("email", FieldKind::Email),
];

impl Shape for Contact {
    const ENTITY: &'static str = "Contact";

    fn fields() -> &'static [FieldSpec] {
        CONTACT_FIELDS
    }
}

impl Shape for StoreInfo {
    const ENTITY: &'static str = "StoreInfo";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("heading", FieldKind::Text),
            FieldSpec::new("address", FieldKind::Text),
            FieldSpec::new("contact", FieldKind::Record(CONTACT_FIELDS)),
        ];
        FIELDS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHour {
    /// Weekday name or range, e.g. `Mon-Thu`.
    pub day: String,
    /// Free-text hours, e.g. `11:00am - 12am`.
    pub time: String,
}

impl Shape for OpeningHour {
    const ENTITY: &'static str = "OpeningHour";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("day", FieldKind::Text),
            FieldSpec::new("time", FieldKind::Text),
        ];
        FIELDS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    /// Platform label.
    pub name: String,
    pub icon: String,
    pub url: String,
}

impl Shape for Social {
    const ENTITY: &'static str = "Social";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("name", FieldKind::Text),
            FieldSpec::new("icon", FieldKind::Text),
            FieldSpec::new("url", FieldKind::Url),
        ];
        FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> StoreInfo {
        StoreInfo {
            heading: "Where to Find Us".to_string(),
            address: "456, Raq Blvd. #404, Los Angeles, CA 90210".to_string(),
            contact: Contact {
                phone: "(555) 987-6543".to_string(),
                email: "hello@jsmcocktail.com".to_string(),
            },
        }
    }

    #[test]
    fn profile_uses_img_path_on_the_wire() {
        let profile = Profile {
            img_path: "/images/profile1.png".to_string(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value, json!({ "imgPath": "/images/profile1.png" }));
        assert_eq!(Profile::parse(&value).unwrap(), profile);
        assert_eq!(
            Profile::check(&json!({ "img_path": "/images/profile1.png" }))
                .unwrap_err()
                .missing_fields(),
            vec!["imgPath"]
        );
    }

    #[test]
    fn store_info_round_trips_through_json() {
        let value = serde_json::to_value(store()).unwrap();
        assert_eq!(value["contact"]["email"], json!("hello@jsmcocktail.com"));
        assert_eq!(StoreInfo::parse(&value).unwrap(), store());
    }

    #[test]
    fn contact_checks_standalone() {
        let value = serde_json::to_value(store().contact).unwrap();
        assert!(Contact::check(&value).is_ok());
        assert!(Contact::check(&json!({ "phone": "n/a", "email": "a@b.com" })).is_err());
    }

    #[test]
    fn hours_and_socials_round_trip_through_json() {
        let hour = OpeningHour {
            day: "Fri".to_string(),
            time: "11:00am - 2am".to_string(),
        };
        let social = Social {
            name: "Instagram".to_string(),
            icon: "/images/insta.png".to_string(),
            url: "https://instagram.com/jsmcocktail".to_string(),
        };

        let hour_value = serde_json::to_value(&hour).unwrap();
        let social_value = serde_json::to_value(&social).unwrap();
        assert_eq!(OpeningHour::parse(&hour_value).unwrap(), hour);
        assert_eq!(Social::parse(&social_value).unwrap(), social);
    }
}
