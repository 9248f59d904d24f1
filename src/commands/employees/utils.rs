use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, ensure, Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tabwriter::TabWriter;
use tokio::fs;

use super::types::{Employee, EmployeeUpdate, UploadSummary};
use crate::state::http::{HttpClient, RequestBody};
use crate::utils::size::unit_multiplier::MB;

pub const MAX_UPLOAD_SIZE: u64 = 10 * MB;

static UPLOAD_EXTENSIONS: &[(&str, &str)] = &[
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("xls", "application/vnd.ms-excel"),
];

pub async fn get_all_employees(http: &HttpClient) -> Result<Vec<Employee>> {
    let employees = http
        .request::<Vec<Employee>>(Method::GET, "/admin/employees", None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(employees)
}

pub async fn get_employee(http: &HttpClient, id: u64) -> Result<Employee> {
    get_all_employees(http)
        .await?
        .into_iter()
        .find(|employee| employee.id == id)
        .ok_or_else(|| anyhow!("Employee `{id}` not found"))
}

pub async fn update_employee(
    http: &HttpClient,
    id: u64,
    update: &EmployeeUpdate,
) -> Result<Option<Employee>> {
    let employee = http
        .request::<Employee>(
            Method::PUT,
            &format!("/admin/employees/{id}"),
            Some(RequestBody::json(update)?),
        )
        .await?;

    Ok(employee)
}

pub async fn delete_employee(http: &HttpClient, id: u64) -> Result<()> {
    http.send(Method::DELETE, &format!("/admin/employees/{id}"), None, None)
        .await?;

    Ok(())
}

/// Spreadsheet that passed the client side checks and is ready to send.
#[derive(Debug)]
pub struct UploadFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: &'static str,
    pub size: u64,
}

/// Runs the format and size checks before anything touches the network.
pub async fn check_upload(path: &Path) -> Result<UploadFile> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("Please select a file to upload"))?
        .to_string();

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let Some(&(_, mime)) = UPLOAD_EXTENSIONS.iter().find(|(ext, _)| *ext == extension) else {
        bail!("Please upload a valid Excel file (.xlsx or .xls)");
    };

    let metadata = fs::metadata(path)
        .await
        .with_context(|| format!("Could not read `{}`", path.display()))?;

    ensure!(metadata.is_file(), "`{}` is not a file", path.display());
    ensure!(
        metadata.len() <= MAX_UPLOAD_SIZE,
        "File size must be less than 10MB"
    );

    Ok(UploadFile {
        path: path.to_path_buf(),
        file_name,
        mime,
        size: metadata.len(),
    })
}

pub async fn upload_employees(http: &HttpClient, file: &UploadFile) -> Result<UploadSummary> {
    let bytes = fs::read(&file.path).await?;

    let form = Form::new().part(
        "file",
        Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(file.mime)?,
    );

    let summary = http
        .request::<UploadSummary>(Method::POST, "/admin/upload", Some(RequestBody::Multipart(form)))
        .await?
        .unwrap_or_default();

    Ok(summary)
}

/// Turns the backend's spreadsheet parsing errors into something actionable.
pub fn explain_upload_error(message: &str) -> String {
    if message.contains("KeyError") || message.contains("column") {
        "Invalid Excel format. Please check that your Excel file has the required columns: employee_id, name, email, date_of_joining, current_department, role, current_project".to_string()
    } else if message.contains("date") {
        "Date format error. Please ensure dates are in a valid format (YYYY-MM-DD or Excel date format)".to_string()
    } else if message.contains("duplicate") || message.contains("unique") {
        "Duplicate employee ID found. Please check your data for duplicate employee IDs."
            .to_string()
    } else {
        message.to_string()
    }
}

/// Case insensitive match on name, email and employee id.
pub fn filter_employees<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let term = term.trim().to_lowercase();

    employees
        .iter()
        .filter(|employee| {
            term.is_empty()
                || employee.name.to_lowercase().contains(&term)
                || employee.email.to_lowercase().contains(&term)
                || employee.employee_id.to_lowercase().contains(&term)
        })
        .collect()
}

pub fn format_employees(employees: &[&Employee], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(tw, "ID\tEMPLOYEE ID\tNAME\tEMAIL\tDEPARTMENT\tROLE").unwrap();
    }

    for employee in employees {
        writeln!(
            tw,
            "{}\t{}\t{}\t{}\t{}\t{}",
            employee.id,
            employee.employee_id,
            employee.name,
            employee.email,
            dash(&employee.current_department),
            dash(&employee.role),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

fn dash(value: &Option<String>) -> &str {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => "-",
    }
}

#[cfg(test)]
mod test {
    use std::io::Write as _;

    use super::*;
    use crate::state::http::testing::{route, MockServer};
    use crate::state::http::Credential;

    fn employees() -> Vec<Employee> {
        serde_json::from_str(
            r#"[
                {"id":1,"employee_id":"E001","name":"Jane Doe","email":"jane@corp.io","current_department":"Engineering","role":"Developer"},
                {"id":2,"employee_id":"E002","name":"John Smith","email":"john@corp.io","current_department":null,"role":"Sales Lead"},
                {"id":3,"employee_id":"X-77","name":"Ana Lima","email":"ana@JANESTREET.io"}
            ]"#,
        )
        .unwrap()
    }

    fn spreadsheet(name: &str, size: u64) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);

        let file = std::fs::File::create(&path).unwrap();
        file.set_len(size).unwrap();

        (dir, path)
    }

    #[test]
    fn test_filter_employees() {
        let employees = employees();

        let ids = |term: &str| {
            filter_employees(&employees, term)
                .iter()
                .map(|e| e.id)
                .collect::<Vec<_>>()
        };

        assert_eq!(ids(""), vec![1, 2, 3]);
        assert_eq!(ids("JANE"), vec![1, 3]);
        assert_eq!(ids("e002"), vec![2]);
        assert_eq!(ids("x-7"), vec![3]);
        assert!(ids("nobody").is_empty());
    }

    #[test]
    fn test_format_employees() {
        let employees = employees();
        let rows = format_employees(&employees.iter().collect::<Vec<_>>(), true);

        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with("ID"));
        assert!(rows[2].contains("John Smith"));

        // missing department and role
        let cells = rows[3].split_whitespace().collect::<Vec<_>>();
        assert_eq!(cells[cells.len() - 2..], ["-", "-"]);
    }

    #[test]
    fn test_explain_upload_error() {
        assert!(explain_upload_error("KeyError: 'employee_id'").starts_with("Invalid Excel format"));
        assert!(explain_upload_error("invalid date value").starts_with("Date format error"));
        assert!(explain_upload_error("UNIQUE constraint failed: duplicate").starts_with("Duplicate employee ID"));
        assert_eq!(explain_upload_error("Server exploded"), "Server exploded");
    }

    #[tokio::test]
    async fn test_check_upload_rejects_csv() {
        let (_dir, path) = spreadsheet("data.csv", 128);

        let error = check_upload(&path).await.unwrap_err();

        assert_eq!(
            error.to_string(),
            "Please upload a valid Excel file (.xlsx or .xls)"
        );
    }

    #[tokio::test]
    async fn test_check_upload_rejects_large_file() {
        let (_dir, path) = spreadsheet("data.xlsx", 12 * MB);

        let error = check_upload(&path).await.unwrap_err();

        assert_eq!(error.to_string(), "File size must be less than 10MB");
    }

    #[tokio::test]
    async fn test_check_upload_accepts_excel() {
        let (_dir, path) = spreadsheet("Staff.XLS", MAX_UPLOAD_SIZE);

        let file = check_upload(&path).await.unwrap();

        assert_eq!(file.file_name, "Staff.XLS");
        assert_eq!(file.mime, "application/vnd.ms-excel");
        assert_eq!(file.size, MAX_UPLOAD_SIZE);
    }

    #[tokio::test]
    async fn test_upload_is_multipart() {
        let server = MockServer::start(vec![route(
            "POST",
            "/admin/upload",
            200,
            r#"{"message":"Processed 2 employees","created":1,"updated":1}"#,
        )])
        .await;
        let http = HttpClient::new(
            Credential::ephemeral(Some("admin".to_string())),
            Some(server.url.clone()),
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.xlsx");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"PK fake workbook")
            .unwrap();

        let file = check_upload(&path).await.unwrap();
        let summary = upload_employees(&http, &file).await.unwrap();

        assert_eq!(summary.message.as_deref(), Some("Processed 2 employees"));
        assert_eq!(summary.created, Some(1));

        let request = &server.requests()[0];
        assert!(request
            .header("content-type")
            .unwrap()
            .starts_with("multipart/form-data; boundary="));
        assert_eq!(request.header("authorization"), Some("Bearer admin"));

        let body = request.body_text();
        assert!(body.contains(r#"name="file"; filename="staff.xlsx""#));
        assert!(body.contains("PK fake workbook"));
    }

    #[tokio::test]
    async fn test_delete_employee_no_content() {
        let server = MockServer::start(vec![route("DELETE", "/admin/employees/2", 204, "")]).await;
        let http = HttpClient::new(
            Credential::ephemeral(Some("admin".to_string())),
            Some(server.url.clone()),
        )
        .unwrap();

        assert!(delete_employee(&http, 2).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_employee_body() {
        let server = MockServer::start(vec![route(
            "PUT",
            "/admin/employees/1",
            200,
            r#"{"id":1,"employee_id":"E001","name":"Jane Roe","email":"jane@corp.io"}"#,
        )])
        .await;
        let http = HttpClient::new(
            Credential::ephemeral(Some("admin".to_string())),
            Some(server.url.clone()),
        )
        .unwrap();

        let update = EmployeeUpdate {
            name: "Jane Roe".to_string(),
            current_project: Some("Atlas".to_string()),
            ..Default::default()
        };

        let employee = update_employee(&http, 1, &update).await.unwrap().unwrap();
        assert_eq!(employee.name, "Jane Roe");

        let body: serde_json::Value =
            serde_json::from_slice(&server.requests()[0].body).unwrap();
        assert_eq!(body["current_project"], "Atlas");
        assert!(body.get("date_of_joining").is_none());
    }
}
