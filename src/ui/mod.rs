pub mod avatar_picker;
pub mod profile_account;
pub mod tabs;

pub const STYLE: &str = r#"
.profile-account {
  padding-top: 136px;
  background-color: #ffffff;
}

.profile-account .avatar {
  min-width: 100px;
  min-height: 100px;
  border-radius: 50px;
  background: #f0f0f0;
}

.profile-account .form {
  padding-top: 31px;
}

.profile-account .error {
  color: #d0312d;
  font-size: smaller;
}

.profile-account .save {
  margin-top: 68px;
  min-width: 327px;
  min-height: 46px;
  border-radius: 30px;
  background: #91b3fa;
  font-family: Mulish, sans-serif;
  font-weight: 600;
  font-size: 16px;
}

.profile-account .notice {
  padding: 8px 16px;
  border-radius: 12px;
  background: alpha(#000000, 0.75);
  color: #ffffff;
}

#avatarpicker .modal {
  padding: 55px;
  border: 1px solid #91b3fa;
  border-radius: 30px;
}

#avatarpicker button {
  padding: 10px;
  border-radius: 20px;
  background: #91b3fa;
}

.tabs .greeting {
  font-size: x-large;
}
"#;
