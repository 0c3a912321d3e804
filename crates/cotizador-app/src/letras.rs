// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Spanish spelling of currency amounts in the Mexican legal-tender form,
//! e.g. `CUATROCIENTOS OCHENTA MIL PESOS 00/100 M.N.`. Output is unaccented
//! uppercase, the convention on printed invoices.

const UNITS: [&str; 10] = [
    "", "UNO", "DOS", "TRES", "CUATRO", "CINCO", "SEIS", "SIETE", "OCHO", "NUEVE",
];

const TEENS: [&str; 10] = [
    "DIEZ",
    "ONCE",
    "DOCE",
    "TRECE",
    "CATORCE",
    "QUINCE",
    "DIECISEIS",
    "DIECISIETE",
    "DIECIOCHO",
    "DIECINUEVE",
];

const TWENTIES: [&str; 10] = [
    "VEINTE",
    "VEINTIUNO",
    "VEINTIDOS",
    "VEINTITRES",
    "VEINTICUATRO",
    "VEINTICINCO",
    "VEINTISEIS",
    "VEINTISIETE",
    "VEINTIOCHO",
    "VEINTINUEVE",
];

const TENS: [&str; 10] = [
    "", "", "", "TREINTA", "CUARENTA", "CINCUENTA", "SESENTA", "SETENTA", "OCHENTA", "NOVENTA",
];

const HUNDREDS: [&str; 10] = [
    "",
    "CIENTO",
    "DOSCIENTOS",
    "TRESCIENTOS",
    "CUATROCIENTOS",
    "QUINIENTOS",
    "SEISCIENTOS",
    "SETECIENTOS",
    "OCHOCIENTOS",
    "NOVECIENTOS",
];

/// Spell a currency amount: whole pesos in words, cents as `NN/100 M.N.`.
pub fn amount_to_words(amount: f64) -> String {
    let cents_total = (amount.max(0.0) * 100.0).round() as u64;
    let pesos = cents_total / 100;
    let cents = cents_total % 100;

    let words = if pesos == 1 {
        "UN PESO".to_owned()
    } else if pesos % 1_000_000 == 0 && pesos > 0 {
        // Exact millions take the partitive: "UN MILLON DE PESOS".
        format!("{} DE PESOS", cardinal(pesos))
    } else {
        format!("{} PESOS", apocopate(cardinal(pesos)))
    };

    format!("{words} {cents:02}/100 M.N.")
}

/// Cardinal spelling of a non-negative integer.
pub fn cardinal(n: u64) -> String {
    if n == 0 {
        return "CERO".to_owned();
    }

    let mut parts: Vec<String> = Vec::new();
    let millions = n / 1_000_000;
    let thousands = (n % 1_000_000) / 1_000;
    let rest = n % 1_000;

    if millions == 1 {
        parts.push("UN MILLON".to_owned());
    } else if millions > 1 {
        parts.push(format!("{} MILLONES", apocopate(cardinal(millions))));
    }

    if thousands == 1 {
        parts.push("MIL".to_owned());
    } else if thousands > 1 {
        parts.push(format!("{} MIL", apocopate(under_thousand(thousands))));
    }

    if rest > 0 {
        parts.push(under_thousand(rest));
    }

    parts.join(" ")
}

fn under_thousand(n: u64) -> String {
    debug_assert!(n < 1_000);
    let hundreds = n / 100;
    let tail = n % 100;

    if n == 100 {
        return "CIEN".to_owned();
    }

    let mut words = String::new();
    if hundreds > 0 {
        words.push_str(HUNDREDS[hundreds as usize]);
        if tail > 0 {
            words.push(' ');
        }
    }
    if tail > 0 {
        words.push_str(&under_hundred(tail));
    }
    words
}

fn under_hundred(n: u64) -> String {
    debug_assert!(n > 0 && n < 100);
    match n {
        1..=9 => UNITS[n as usize].to_owned(),
        10..=19 => TEENS[(n - 10) as usize].to_owned(),
        20..=29 => TWENTIES[(n - 20) as usize].to_owned(),
        _ => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_owned(),
                unit => format!("{tens} Y {}", UNITS[unit as usize]),
            }
        }
    }
}

/// "UNO" apocopates to "UN" before a noun or multiplier:
/// VEINTIUNO MIL -> VEINTIUN MIL, TREINTA Y UNO PESOS -> TREINTA Y UN PESOS.
fn apocopate(words: String) -> String {
    match words.strip_suffix("UNO") {
        Some(stem) => format!("{stem}UN"),
        None => words,
    }
}
