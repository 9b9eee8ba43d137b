use once_cell::sync::Lazy;
use regex::Regex;

static STUDENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid student id regex"));

// 加入码字母表：数字去掉 0/1，大写字母去掉 I/O，共 32 个字符
static ENROLLMENT_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[2-9A-HJ-NP-Z]{6}$").expect("Invalid enrollment code regex"));

pub fn validate_student_id(student_id: &str) -> Result<(), &'static str> {
    // 学生ID长度校验：1 <= x <= 64
    if student_id.is_empty() || student_id.len() > 64 {
        return Err("Student id length must be between 1 and 64 characters");
    }
    // 学生ID格式校验：只能包含字母、数字、下划线或连字符
    if !STUDENT_ID_RE.is_match(student_id) {
        return Err("Student id must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_enrollment_code(code: &str) -> Result<(), &'static str> {
    // 加入码格式校验：6 位，限定在无歧义字母表内
    if !ENROLLMENT_CODE_RE.is_match(code) {
        return Err("Enrollment code must be 6 characters from the unambiguous alphabet");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_student_id() {
        assert!(validate_student_id("student-42").is_ok());
        assert!(validate_student_id("a").is_ok());
        assert!(validate_student_id("").is_err());
        assert!(validate_student_id("bad id").is_err());
        assert!(validate_student_id(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_enrollment_code() {
        assert!(validate_enrollment_code("ABC234").is_ok());
        assert!(validate_enrollment_code("ZZZZ99").is_ok());
        // 易混淆字符不在字母表内
        assert!(validate_enrollment_code("ABC01O").is_err());
        assert!(validate_enrollment_code("ABCI23").is_err());
        // 长度必须为 6
        assert!(validate_enrollment_code("ABC23").is_err());
        assert!(validate_enrollment_code("ABC2345").is_err());
        // 小写不接受
        assert!(validate_enrollment_code("abc234").is_err());
    }
}
