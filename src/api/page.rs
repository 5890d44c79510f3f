//! Server-side rendering of the paycheck form page.
//!
//! One static template with eight interpolation slots: the two echoed
//! inputs, the two error slots, the three result slots, and the tax
//! percentage. Raw user input is HTML-escaped before it is echoed back.

use crate::models::PayInput;
use crate::presentation::PayDisplay;

/// Renders the full form page.
///
/// `input` supplies the raw submitted values to re-echo into the form (empty
/// on first load); `display` supplies the result and error slots;
/// `tax_percent` is the fixed rate shown in the read-only field.
pub fn render_page(input: &PayInput, display: &PayDisplay, tax_percent: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Paycheck Calculator</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body class="m-0 p-0">
    <div class="container mt-1 mb-4 pt-3">
        <h3 class="text-center text-uppercase fw-light">Paycheck Calculator</h3>
    </div>
    <div class="container mt-2 w-50 mx-auto">
        <form action="/" method="POST" class="w-100">
            <div class="input-group mb-1">
                <span class="input-group-text w-25 border-0">Hourly Rate</span>
                <input type="text" name="hourlyRate" class="form-control text-center" value="{hourly_rate}" placeholder="Enter the hourly rate.">
            </div>
            <small><p class="text-danger m-1">{hourly_rate_error}</p></small>
            <div class="input-group mb-1">
                <span class="input-group-text w-25 border-0">Hours Worked</span>
                <input type="text" name="hoursWorked" class="form-control text-center" value="{hours_worked}" placeholder="Enter the number of hours worked.">
            </div>
            <small><p class="text-danger m-0">{hours_worked_error}</p></small>
            <div class="input-group mb-1">
                <span class="input-group-text w-25 border-0">Tax Percentage</span>
                <input type="text" name="taxPercentage" class="form-control text-center" value="{tax_percent}" readonly>
                <span class="input-group-text border-0">%</span>
            </div>
            <hr class="w-100 border border-dark border-1">
            <div class="input-group mb-1">
                <span class="input-group-text w-25 border-0">Gross Pay</span>
                <span class="input-group-text border-0">$</span>
                <input type="text" id="grossPay" class="form-control text-center" value="{gross_pay}" readonly>
            </div>
            <div class="input-group mb-1">
                <span class="input-group-text w-25 border-0">Taxes</span>
                <span class="input-group-text border-0">$</span>
                <input type="text" id="taxes" class="form-control text-center" value="{tax_amount}" readonly>
            </div>
            <div class="input-group mb-1">
                <span class="input-group-text w-25 border-0">Net Pay</span>
                <span class="input-group-text border-0">$</span>
                <input type="text" id="netPay" class="form-control text-center" value="{net_pay}" readonly>
            </div>
            <div class="w-100">
                <button type="submit" class="btn btn-primary mt-2 w-100">Calculate</button>
            </div>
        </form>
    </div>
</body>
</html>"#,
        hourly_rate = escape_html(&input.hourly_rate),
        hours_worked = escape_html(&input.hours_worked),
        hourly_rate_error = display.hourly_rate_error,
        hours_worked_error = display.hours_worked_error,
        tax_percent = tax_percent,
        gross_pay = display.gross_pay,
        tax_amount = display.tax_amount,
        net_pay = display.net_pay,
    )
}

/// Escapes the characters HTML attribute values cannot carry verbatim.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
