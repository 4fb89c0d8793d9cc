use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::item::{ItemUpdate, NewItem};
use crate::domain::types::{
    CostPerUnit, ItemId, ItemName, ItemQuantity, RoomId, TypeConstraintError,
};

#[derive(Deserialize, Validate)]
pub struct AddItemForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub cost_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddItemFormPayload {
    pub name: ItemName,
    pub quantity: ItemQuantity,
    pub cost_per_unit: CostPerUnit,
}

impl AddItemFormPayload {
    pub fn into_new_item(self, room_id: RoomId) -> NewItem {
        NewItem {
            room_id,
            name: self.name,
            quantity: self.quantity,
            cost_per_unit: self.cost_per_unit,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AddItemFormError {
    #[error("Add item form validation failed: {0}")]
    Validation(String),
    #[error("Add item form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddItemFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddItemFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddItemForm> for AddItemFormPayload {
    type Error = AddItemFormError;

    fn try_from(value: AddItemForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: ItemName::new(value.name)?,
            quantity: ItemQuantity::new(value.quantity)?,
            // A negative unit cost coerces to zero instead of rejecting.
            cost_per_unit: CostPerUnit::new(value.cost_per_unit.max(0.0))?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateItemForm {
    #[validate(range(min = 1))]
    pub item_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub cost_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateItemFormPayload {
    pub item_id: ItemId,
    pub name: ItemName,
    pub quantity: ItemQuantity,
    pub cost_per_unit: CostPerUnit,
}

impl UpdateItemFormPayload {
    pub fn into_item_update(self) -> ItemUpdate {
        ItemUpdate {
            name: self.name,
            quantity: self.quantity,
            cost_per_unit: self.cost_per_unit,
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateItemFormError {
    #[error("Update item form validation failed: {0}")]
    Validation(String),
    #[error("Update item form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateItemFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateItemFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateItemForm> for UpdateItemFormPayload {
    type Error = UpdateItemFormError;

    fn try_from(value: UpdateItemForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            item_id: ItemId::new(value.item_id)?,
            name: ItemName::new(value.name)?,
            quantity: ItemQuantity::new(value.quantity)?,
            cost_per_unit: CostPerUnit::new(value.cost_per_unit.max(0.0))?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct DeleteItemForm {
    #[validate(range(min = 1))]
    pub item_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteItemFormPayload {
    pub item_id: ItemId,
}

#[derive(Debug, Error)]
pub enum DeleteItemFormError {
    #[error("Delete item form validation failed: {0}")]
    Validation(String),
    #[error("Delete item form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for DeleteItemFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for DeleteItemFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<DeleteItemForm> for DeleteItemFormPayload {
    type Error = DeleteItemFormError;

    fn try_from(value: DeleteItemForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            item_id: ItemId::new(value.item_id)?,
        })
    }
}
