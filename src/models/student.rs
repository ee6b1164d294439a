//! Student records used as request bodies and typed responses.

use serde::{Deserialize, Serialize};

/// A student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Receiver-assigned identifier; absent on create requests.
    pub id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub class_name: Option<String>,
}

impl Student {
    fn new(id: Option<i64>, name: &str, address: &str, phone: &str, class_name: &str) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            address: Some(address.to_string()),
            phone: Some(phone.to_string()),
            class_name: Some(class_name.to_string()),
        }
    }

    /// The student sent by every create-style scenario.
    pub fn sample() -> Self {
        Self::new(None, "Ye Win", "Yangon", "+959123456789", "Room A")
    }

    /// Three students with identifiers, sent by the list-body scenario.
    pub fn sample_list() -> Vec<Self> {
        vec![
            Self::new(Some(1), "Ye Win", "Yangon", "+959123456789", "Room A"),
            Self::new(Some(2), "Mg Mg", "Mandalay", "+959123456789", "Room B"),
            Self::new(Some(3), "Aung Aung", "NayPyiTaw", "+959123456789", "Room C"),
        ]
    }
}

/// Projection of a student returned by the custom object list scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentNameAndClass {
    pub name: Option<String>,
    pub class_name: Option<String>,
}

/// Request wrapper around a list of students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentListObject {
    pub data_list: Vec<Student>,
}

impl StudentListObject {
    pub fn sample() -> Self {
        Self {
            data_list: Student::sample_list(),
        }
    }
}

/// Request wrapper around a list of plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringListObject {
    pub str_list_object: Vec<String>,
}

impl StringListObject {
    pub fn sample() -> Self {
        Self {
            str_list_object: vec!["Ye Win".to_string(), "Mr. Ye Win".to_string()],
        }
    }
}
