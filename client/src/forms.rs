//! 表单状态模块
//!
//! 每个表单都是一组纯字符串字段，负责：
//! - 按字段名读写（每次编辑只覆盖一个字段）
//! - 重置到初始值
//! - 转换为 API 请求对象

use crate::error::FormError;
use lostfound_shared::date::parse_calendar_date;
use lostfound_shared::protocol::{
    CreateClaimRequest, CreateReportRequest, LoginRequest, RegisterRequest,
};
use lostfound_shared::ReportStatus;

/// 表单标识，用于按名称路由字段编辑
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Register,
    Login,
    Report,
    Claim,
}

/// 按字段名访问的表单
pub trait FieldSet {
    /// 所有字段名，顺序即渲染顺序
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// 覆盖单个字段，其余字段保持不变；未知字段名不做任何修改
    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let slot = self
            .field_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        *slot = value;
        Ok(())
    }
}

// =========================================================
// Register
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub student_number: String,
    pub email: String,
    pub contact_info: String,
    pub password: String,
}

impl FieldSet for RegisterForm {
    const FIELDS: &'static [&'static str] = &["student_number", "email", "contact_info", "password"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "student_number" => Some(self.student_number.as_str()),
            "email" => Some(self.email.as_str()),
            "contact_info" => Some(self.contact_info.as_str()),
            "password" => Some(self.password.as_str()),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "student_number" => Some(&mut self.student_number),
            "email" => Some(&mut self.email),
            "contact_info" => Some(&mut self.contact_info),
            "password" => Some(&mut self.password),
            _ => None,
        }
    }
}

impl RegisterForm {
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            student_number: self.student_number.clone(),
            email: self.email.clone(),
            contact_info: self.contact_info.clone(),
            password: self.password.clone(),
        }
    }
}

// =========================================================
// Login
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub student_number: String,
    pub password: String,
}

impl FieldSet for LoginForm {
    const FIELDS: &'static [&'static str] = &["student_number", "password"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "student_number" => Some(self.student_number.as_str()),
            "password" => Some(self.password.as_str()),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "student_number" => Some(&mut self.student_number),
            "password" => Some(&mut self.password),
            _ => None,
        }
    }
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            student_number: self.student_number.clone(),
            password: self.password.clone(),
        }
    }
}

// =========================================================
// Report
// =========================================================

/// 报告表单，`status` 初始为 `reported`，其余字段为空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportForm {
    pub object_name: String,
    pub category: String,
    pub description: String,
    /// `YYYY-MM-DD`，来自 `<input type="date">`
    pub date_reported: String,
    pub last_location: String,
    pub status: String,
    /// 可选
    pub image_url: String,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            object_name: String::new(),
            category: String::new(),
            description: String::new(),
            date_reported: String::new(),
            last_location: String::new(),
            status: ReportStatus::default().as_str().to_string(),
            image_url: String::new(),
        }
    }
}

impl FieldSet for ReportForm {
    const FIELDS: &'static [&'static str] = &[
        "object_name",
        "category",
        "description",
        "date_reported",
        "last_location",
        "status",
        "image_url",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "object_name" => Some(self.object_name.as_str()),
            "category" => Some(self.category.as_str()),
            "description" => Some(self.description.as_str()),
            "date_reported" => Some(self.date_reported.as_str()),
            "last_location" => Some(self.last_location.as_str()),
            "status" => Some(self.status.as_str()),
            "image_url" => Some(self.image_url.as_str()),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "object_name" => Some(&mut self.object_name),
            "category" => Some(&mut self.category),
            "description" => Some(&mut self.description),
            "date_reported" => Some(&mut self.date_reported),
            "last_location" => Some(&mut self.last_location),
            "status" => Some(&mut self.status),
            "image_url" => Some(&mut self.image_url),
            _ => None,
        }
    }
}

impl ReportForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<CreateReportRequest, FormError> {
        let date_reported =
            parse_calendar_date(&self.date_reported).ok_or(FormError::InvalidDate)?;
        let image_url = self.image_url.trim();

        Ok(CreateReportRequest {
            object_name: self.object_name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            date_reported,
            last_location: self.last_location.clone(),
            status: self.status.clone(),
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
        })
    }
}

// =========================================================
// Claim
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimForm {
    pub object_id: String,
}

impl FieldSet for ClaimForm {
    const FIELDS: &'static [&'static str] = &["object_id"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "object_id" => Some(self.object_id.as_str()),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "object_id" => Some(&mut self.object_id),
            _ => None,
        }
    }
}

impl ClaimForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<CreateClaimRequest, FormError> {
        let object_id = self
            .object_id
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::InvalidObjectId)?;
        Ok(CreateClaimRequest { object_id })
    }
}
