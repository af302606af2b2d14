//! Server-rendered pages: the sign-in/out form, the admin login form and the
//! daily dashboard.

use chrono::NaiveTime;

use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::utils::dashboard::DashboardSummary;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem auto; max-width: 60rem; }}
table {{ border-collapse: collapse; width: 100%; }}
td, th {{ border: 1px solid #ccc; padding: .3rem .6rem; text-align: left; }}
form {{ margin-bottom: 1.5rem; }}
</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape(title),
    )
}

pub fn index_page(employees: &[Employee]) -> String {
    let options: String = employees
        .iter()
        .map(|e| {
            format!(
                r#"<option value="{name}" data-email="{email}">{name}</option>"#,
                name = escape(&e.name),
                email = escape(&e.email),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Attendance</h1>
<p id="who"></p>
<form id="request" method="post" action="/request-code">
  <label>Employee <select name="selected_name" id="selected_name"><option value="">(by email)</option>{options}</select></label>
  <label>Email <input type="email" name="email" id="email"></label>
  <select name="action"><option value="sign_in">Sign in</option><option value="sign_out">Sign out</option></select>
  <button type="submit">Send code</button>
</form>
<form method="post" action="/verify-and-submit">
  <input type="hidden" name="email" id="verify_email">
  <input type="hidden" name="selected_name" id="verify_name">
  <label>Code <input name="code" maxlength="5" required></label>
  <select name="action"><option value="sign_in">Sign in</option><option value="sign_out">Sign out</option></select>
  <button type="submit">Submit</button>
</form>
<script>
const email = document.getElementById('email');
const name = document.getElementById('selected_name');
function sync() {{
  document.getElementById('verify_email').value = email.value;
  document.getElementById('verify_name').value = name.value;
}}
email.addEventListener('input', sync);
name.addEventListener('change', sync);
fetch('/get-system-email').then(r => r.json()).then(data => {{
  if (data.email) email.value = data.email;
  if (data.name) name.value = data.name;
  if (data.multiple) document.getElementById('who').textContent = 'Shared computer: pick your name.';
  if (data.message) document.getElementById('who').textContent = data.message;
  sync();
}});
</script>"#
    );

    layout("Attendance", &body)
}

pub fn admin_login_page() -> String {
    layout(
        "Admin login",
        r#"<h1>Admin login</h1>
<form method="post" action="/admin">
  <label>Username <input name="username" required></label>
  <label>Password <input type="password" name="password" required></label>
  <button type="submit">Log in</button>
</form>"#,
    )
}

fn name_list(title: &str, names: &[String]) -> String {
    let items: String = names
        .iter()
        .map(|n| format!("<li>{}</li>", escape(n)))
        .collect();
    format!("<h2>{} ({})</h2><ul>{items}</ul>", escape(title), names.len())
}

fn cell_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M:%S").to_string()).unwrap_or_default()
}

fn cell(v: Option<&str>) -> String {
    escape(v.unwrap_or(""))
}

pub fn dashboard_page(
    today: &str,
    shift: &str,
    total: usize,
    summary: &DashboardSummary,
    records: &[AttendanceRecord],
) -> String {
    let rows: String = records
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&r.name),
                r.date.format("%Y-%m-%d"),
                cell_time(r.sign_in),
                cell_time(r.sign_out),
                cell(r.status.as_deref()),
                cell(r.late_by.as_deref()),
                cell(r.worked_hours.as_deref()),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Attendance for {today}</h1>
<p>Office hours: {shift} &middot; {total} employees &middot; <a href="/logout">Log out</a></p>
{signed_in}
{signed_out}
{late}
{absent}
<h2>Records</h2>
<table>
<tr><th>Name</th><th>Date</th><th>Sign in</th><th>Sign out</th><th>Status</th><th>Late by</th><th>Worked</th></tr>
{rows}
</table>"#,
        today = escape(today),
        shift = escape(shift),
        signed_in = name_list("Signed in", &summary.signed_in),
        signed_out = name_list("Signed out", &summary.signed_out),
        late = name_list("Late", &summary.late),
        absent = name_list("Absent", &summary.absent),
    );

    layout("Dashboard", &body)
}
