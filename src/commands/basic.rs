//! # Comandos Básicos
//! src/commands/basic.rs
//!
//! Cálculos sobre parámetros de la query:
//! - multiply?num1=A&num2=B: producto de dos enteros
//! - reverse?text=T: texto invertido
//! - palindrome?text=T&ignoreCase=B: chequeo de palíndromo
//! - fibonacci?start=S&count=N: N términos de Fibonacci desde el índice S

use super::query_params;
use crate::http::{QueryParameters, Request, Response, StatusCode};
use crate::router::RouteContext;

/// Índice inicial máximo aceptado por `fibonacci`
pub const MAX_FIBONACCI_START: i32 = 1_000_000;

/// Cantidad máxima de términos por request
pub const MAX_FIBONACCI_COUNT: i32 = 10_000;

/// Handler para /multiply?num1=A&num2=B
///
/// Enteros de 32 bits con signo; el producto da la vuelta en overflow.
///
/// # Ejemplo de response
/// ```text
/// Result is: 12
/// ```
pub fn multiply_handler(_ctx: &RouteContext<'_>, req: &Request) -> Response {
    let params = match query_params(req) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let num1 = match required_i32(&params, "num1") {
        Ok(n) => n,
        Err(reason) => return invalid_operand("num1", &reason),
    };
    let num2 = match required_i32(&params, "num2") {
        Ok(n) => n,
        Err(reason) => return invalid_operand("num2", &reason),
    };

    Response::html(
        StatusCode::Ok,
        &format!("Result is: {}", num1.wrapping_mul(num2)),
    )
}

/// Parámetro presente, no vacío y entero
fn required_i32(params: &QueryParameters, name: &str) -> Result<i32, String> {
    let raw = params
        .non_empty(name)
        .ok_or_else(|| format!("{} is missing", name))?;

    raw.parse()
        .map_err(|_| format!("{} is not an integer: {}", name, raw))
}

fn invalid_operand(name: &str, reason: &str) -> Response {
    Response::html(
        StatusCode::BadRequest,
        &format!("<h1>Error: Invalid {} – {}</h1>", name, reason),
    )
}

/// Handler para /reverse?text=TEXT
///
/// Invierte el texto por caracteres (no por bytes).
pub fn reverse_handler(_ctx: &RouteContext<'_>, req: &Request) -> Response {
    let params = match query_params(req) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let text = match params.non_empty("text") {
        Some(t) => t,
        None => {
            return Response::html(
                StatusCode::BadRequest,
                "<h1>Error: No text provided to reverse</h1>",
            );
        }
    };

    let reversed: String = text.chars().rev().collect();

    Response::html(
        StatusCode::Ok,
        &format!("<h1>Original:</h1>{}<br><h1>Reversed:</h1>{}", text, reversed),
    )
}

/// Handler para /palindrome?text=TEXT&ignoreCase=BOOL
///
/// `ignoreCase` es opcional y vale `true` salvo que se pase otro valor
/// distinto de "true" (sin importar mayúsculas).
pub fn palindrome_handler(_ctx: &RouteContext<'_>, req: &Request) -> Response {
    let params = match query_params(req) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let text = match params.non_empty("text") {
        Some(t) => t,
        None => {
            return Response::html(
                StatusCode::BadRequest,
                "<h1>Error: Missing 'text' parameter</h1>",
            );
        }
    };

    let ignore_case = params
        .get("ignoreCase")
        .unwrap_or("true")
        .eq_ignore_ascii_case("true");

    let verdict = if is_palindrome(text, ignore_case) {
        "Yes, it's a palindrome!"
    } else {
        "No, not a palindrome"
    };

    Response::html(
        StatusCode::Ok,
        &format!(
            "<h1>Palindrome Check</h1>Text: {}<br>Ignore Case: {}<br>Result: {}",
            text, ignore_case, verdict
        ),
    )
}

fn is_palindrome(text: &str, ignore_case: bool) -> bool {
    let processed = if ignore_case {
        text.to_lowercase()
    } else {
        text.to_string()
    };
    let reversed: String = processed.chars().rev().collect();
    processed == reversed
}

/// Handler para /fibonacci?start=S&count=N
///
/// # Query parameters
/// - `start`: índice del primer término, entero en `0..=MAX_FIBONACCI_START`
/// - `count`: cantidad de términos, entero en `1..=MAX_FIBONACCI_COUNT`
///
/// Aritmética de 64 bits; más allá de F(92) los valores dan la vuelta.
pub fn fibonacci_handler(_ctx: &RouteContext<'_>, req: &Request) -> Response {
    let params = match query_params(req) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let parsed = params
        .get("start")
        .and_then(|s| s.parse::<i32>().ok())
        .zip(params.get("count").and_then(|c| c.parse::<i32>().ok()));

    let (start, count) = match parsed {
        Some(pair) => pair,
        None => {
            return Response::html(
                StatusCode::BadRequest,
                "<h1>Error: Invalid number format for 'start' or 'count'</h1>",
            );
        }
    };

    if start < 0 || count <= 0 {
        return Response::html(
            StatusCode::BadRequest,
            "<h1>Error: 'start' must be >= 0 and 'count' must be > 0</h1>",
        );
    }
    // Cota de trabajo por request
    if start > MAX_FIBONACCI_START || count > MAX_FIBONACCI_COUNT {
        return Response::html(
            StatusCode::BadRequest,
            &format!(
                "<h1>Error: 'start' must be <= {} and 'count' must be <= {}</h1>",
                MAX_FIBONACCI_START, MAX_FIBONACCI_COUNT
            ),
        );
    }

    let mut body = format!("<h1>Fibonacci Sequence</h1>Start index: {}<br>Sequence: ", start);
    for term in fibonacci_terms(start as u64, count as u64) {
        body.push_str(&term.to_string());
        body.push(' ');
    }

    Response::html(StatusCode::Ok, &body)
}

/// `count` términos de Fibonacci desde el índice `start` (F(0) = 0)
pub fn fibonacci_terms(start: u64, count: u64) -> impl Iterator<Item = i64> {
    let mut pair: (i64, i64) = (0, 1);
    for _ in 0..start {
        pair = (pair.1, pair.0.wrapping_add(pair.1));
    }

    std::iter::successors(Some(pair), |&(a, b)| Some((b, a.wrapping_add(b))))
        .map(|(a, _)| a)
        .take(count as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::testing::*;
    use crate::story::Story;

    fn call(handler: crate::router::Handler, target: &str) -> Response {
        let assets = FakeAssets::default();
        let fetcher = FakeFetcher::replying("");
        let story = Story::new();
        handler(&context(&assets, &fetcher, &story), &Request::new(target))
    }

    // ==================== multiply ====================

    #[test]
    fn test_multiply() {
        let response = call(multiply_handler, "multiply?num1=3&num2=4");

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body_text().contains("Result is: 12"));
    }

    #[test]
    fn test_multiply_negative() {
        let response = call(multiply_handler, "multiply?num1=-3&num2=4");
        assert_eq!(response.body_text(), "Result is: -12");
    }

    #[test]
    fn test_multiply_wraps_on_overflow() {
        let response = call(multiply_handler, "multiply?num1=2147483647&num2=2");
        assert_eq!(response.body_text(), "Result is: -2");
    }

    #[test]
    fn test_multiply_missing_num2() {
        let response = call(multiply_handler, "multiply?num1=3");

        assert_eq!(response.status(), StatusCode::BadRequest);
        assert!(response.body_text().contains("num2"));
        assert!(response.body_text().contains("missing"));
    }

    #[test]
    fn test_multiply_empty_num1() {
        let response = call(multiply_handler, "multiply?num1=&num2=4");

        assert_eq!(response.status(), StatusCode::BadRequest);
        assert!(response.body_text().contains("Invalid num1"));
    }

    #[test]
    fn test_multiply_not_a_number() {
        let response = call(multiply_handler, "multiply?num1=3&num2=abc");

        assert_eq!(response.status(), StatusCode::BadRequest);
        assert_eq!(
            response.body_text(),
            "<h1>Error: Invalid num2 – num2 is not an integer: abc</h1>"
        );
    }

    #[test]
    fn test_multiply_malformed_query() {
        let response = call(multiply_handler, "multiply?num1");
        assert_eq!(response.status(), StatusCode::BadRequest);
    }

    // ==================== reverse ====================

    #[test]
    fn test_reverse() {
        let response = call(reverse_handler, "reverse?text=abc");

        assert_eq!(response.status(), StatusCode::Ok);
        let body = response.body_text();
        assert!(body.contains("abc"));
        assert!(body.contains("cba"));
    }

    #[test]
    fn test_reverse_decodes_and_handles_unicode() {
        let response = call(reverse_handler, "reverse?text=hola%20%C3%B1u");
        assert!(response.body_text().ends_with("uñ aloh"));
    }

    #[test]
    fn test_reverse_missing_text() {
        assert_eq!(call(reverse_handler, "reverse").status(), StatusCode::BadRequest);
        assert_eq!(call(reverse_handler, "reverse?text=").status(), StatusCode::BadRequest);
    }

    // ==================== palindrome ====================

    #[test]
    fn test_palindrome_ignores_case_by_default() {
        let response = call(palindrome_handler, "palindrome?text=Racecar");

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body_text().contains("Ignore Case: true"));
        assert!(response.body_text().contains("Yes, it's a palindrome!"));
    }

    #[test]
    fn test_palindrome_case_sensitive() {
        let response = call(palindrome_handler, "palindrome?text=Racecar&ignoreCase=false");

        assert!(response.body_text().contains("Ignore Case: false"));
        assert!(response.body_text().contains("No, not a palindrome"));
    }

    #[test]
    fn test_palindrome_ignore_case_flag_is_case_insensitive() {
        let response = call(palindrome_handler, "palindrome?text=Abba&ignoreCase=TRUE");
        assert!(response.body_text().contains("Yes"));
    }

    #[test]
    fn test_palindrome_missing_text() {
        let response = call(palindrome_handler, "palindrome?ignoreCase=true");
        assert_eq!(response.status(), StatusCode::BadRequest);
    }

    // ==================== fibonacci ====================

    #[test]
    fn test_fibonacci_from_zero() {
        let response = call(fibonacci_handler, "fibonacci?start=0&count=5");

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body_text().contains("Sequence: 0 1 1 2 3 "));
    }

    #[test]
    fn test_fibonacci_from_offset() {
        let response = call(fibonacci_handler, "fibonacci?start=3&count=3");
        assert!(response.body_text().ends_with("Sequence: 2 3 5 "));
    }

    #[test]
    fn test_fibonacci_terms() {
        let terms = |start, count| fibonacci_terms(start, count).collect::<Vec<_>>();

        assert_eq!(terms(0, 5), vec![0, 1, 1, 2, 3]);
        assert_eq!(terms(10, 1), vec![55]);
        assert_eq!(terms(92, 1), vec![7_540_113_804_746_346_429]);
    }

    #[test]
    fn test_fibonacci_wraps_past_i64() {
        // F(93) no cabe en i64
        let term = fibonacci_terms(93, 1).next().unwrap();
        assert!(term < 0);
    }

    #[test]
    fn test_fibonacci_invalid_numbers() {
        let response = call(fibonacci_handler, "fibonacci?start=a&count=3");

        assert_eq!(response.status(), StatusCode::BadRequest);
        assert!(response.body_text().contains("Invalid number format"));
        assert_eq!(call(fibonacci_handler, "fibonacci?start=1").status(), StatusCode::BadRequest);
    }

    #[test]
    fn test_fibonacci_constraints() {
        let response = call(fibonacci_handler, "fibonacci?start=-1&count=3");
        assert!(response.body_text().contains("'start' must be >= 0"));

        let response = call(fibonacci_handler, "fibonacci?start=0&count=0");
        assert_eq!(response.status(), StatusCode::BadRequest);
    }

    #[test]
    fn test_fibonacci_rejects_huge_count() {
        let response = call(fibonacci_handler, "fibonacci?start=0&count=2147483647");

        assert_eq!(response.status(), StatusCode::BadRequest);
        assert!(response.body_text().contains("'count' must be <= 10000"));
    }

    #[test]
    fn test_fibonacci_rejects_huge_start() {
        let response = call(fibonacci_handler, "fibonacci?start=2147483647&count=1");
        assert_eq!(response.status(), StatusCode::BadRequest);
    }

    #[test]
    fn test_fibonacci_accepts_limits() {
        let target = format!(
            "fibonacci?start={}&count={}",
            MAX_FIBONACCI_START, MAX_FIBONACCI_COUNT
        );
        let response = call(fibonacci_handler, &target);

        assert_eq!(response.status(), StatusCode::Ok);
        let sequence = response.body_text().rsplit("Sequence: ").next().unwrap().to_string();
        assert_eq!(sequence.split_whitespace().count(), MAX_FIBONACCI_COUNT as usize);
    }
}
