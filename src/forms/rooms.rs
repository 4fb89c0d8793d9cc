use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::room::NewRoom;
use crate::domain::types::{RoomId, RoomName, TypeConstraintError};

#[derive(Deserialize, Validate)]
pub struct AddRoomForm {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddRoomFormPayload {
    pub name: RoomName,
}

impl AddRoomFormPayload {
    pub fn into_new_room(self) -> NewRoom {
        NewRoom {
            name: self.name,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AddRoomFormError {
    #[error("Add room form validation failed: {0}")]
    Validation(String),
    #[error("Add room form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddRoomFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddRoomFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddRoomForm> for AddRoomFormPayload {
    type Error = AddRoomFormError;

    fn try_from(value: AddRoomForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: RoomName::new(value.name)?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateRoomForm {
    #[validate(range(min = 1))]
    pub room_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRoomFormPayload {
    pub room_id: RoomId,
    pub name: RoomName,
}

#[derive(Debug, Error)]
pub enum UpdateRoomFormError {
    #[error("Update room form validation failed: {0}")]
    Validation(String),
    #[error("Update room form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateRoomFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateRoomFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateRoomForm> for UpdateRoomFormPayload {
    type Error = UpdateRoomFormError;

    fn try_from(value: UpdateRoomForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            room_id: RoomId::new(value.room_id)?,
            name: RoomName::new(value.name)?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct DeleteRoomForm {
    #[validate(range(min = 1))]
    pub room_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRoomFormPayload {
    pub room_id: RoomId,
}

#[derive(Debug, Error)]
pub enum DeleteRoomFormError {
    #[error("Delete room form validation failed: {0}")]
    Validation(String),
    #[error("Delete room form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for DeleteRoomFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for DeleteRoomFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<DeleteRoomForm> for DeleteRoomFormPayload {
    type Error = DeleteRoomFormError;

    fn try_from(value: DeleteRoomForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            room_id: RoomId::new(value.room_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_room_name_is_rejected() {
        let form = AddRoomForm {
            name: String::new(),
        };
        assert!(matches!(
            AddRoomFormPayload::try_from(form),
            Err(AddRoomFormError::Validation(_))
        ));
    }

    #[test]
    fn whitespace_only_room_name_is_rejected() {
        let form = AddRoomForm {
            name: "   ".to_string(),
        };
        assert!(matches!(
            AddRoomFormPayload::try_from(form),
            Err(AddRoomFormError::TypeConstraint(_))
        ));
    }

    #[test]
    fn room_name_is_trimmed() {
        let form = AddRoomForm {
            name: "  Kitchen  ".to_string(),
        };
        let payload = AddRoomFormPayload::try_from(form).unwrap();
        assert_eq!(payload.name.as_str(), "Kitchen");
    }
}
