//! The firmware's numeric error code table.
//!
//! Returned by `getLastError` (opcode `#n`) and surfaced to callers via
//! [`crate::types::PrinterError::message`]. The mapping is preserved
//! exactly as documented by the firmware; these are the manufacturer's
//! own Polish diagnostic strings, not translated, since they are what
//! a technician or the firmware manual will reference.

/// Looks up the human-readable message for a firmware error code.
///
/// Unknown codes (including reserved ranges the firmware does not
/// currently assign) return the catch-all `"Nieznany numer błędu"`
/// ("unknown error number"), matching the source's `default` case.
pub fn lookup(code: i32) -> &'static str {
    match code {
        0 => "Operacja wykonana pomyślnie",

        1 => "Nie zainicjowany zegar RTC",
        2 => "Nieprawidłowy bajt kontrolny",
        3 => "Nieprawidłowa ilość parametrów",
        4 => "Nieprawidłowy parametr",
        5 => "Błąd operacji z zegarem RTC",
        6 => "Błąd operacji z modułem fiskalnym",
        7 => "Nieprawidłowa data",
        8 => "Błąd operacji - niezerowe totalizery",
        9 => "Błąd operacji wejścia/wyjścia",
        10 => "Przekroczony zakres danych",
        11 => "Nieprawidłowa ilość stawek PTU",
        12 => "Nieprawidłowy nagłówek",
        13 => "Nie można refiskalizować urządzenia",
        14 => "Nie można zapisać nagłówka",
        15 => "Nieprawidłowe linie dodatkowe",
        16 => "Nieprawidłowa nazwa towaru",
        17 => "Nieprawidłowa ilość",
        18 => "Nieprawidłowa stawka PTU towaru",
        19 => "Nieprawidłowa cena towaru",
        20 => "Nieprawidłowa wartość towaru",
        21 => "Paragon nie został rozpoczęty",
        22 => "Błąd operacji storno",
        23 => "Nieprawidłowa ilość linii paragonu",
        24 => "Przepełnienie bufora wydruku",
        25 => "Nieprawidłowy tekst lub nazwa kasjera",
        26 => "Nieprawidłowa wartość płatności",
        27 => "Nieprawidłowa wartość całkowita",
        28 => "Przepełnienie totalizera sprzedaży",
        29 => "Próba zakończenia nie rozpoczętego paragonu",
        30 => "Nieprawidłowa wartość płatności 2",
        31 => "Przepełnienie stanu kasy",
        32 => "Ujemny stan kasy został zastąpiony zerowym",
        33 => "Nieprawidłowy tekst zmiany",
        34 => "Nieprawidłowa wartość lub tekst",
        35 => "Zerowe totalizery sprzedaży",
        36 => "Rekord już istnieje",
        37 => "Anulowane przez użytkownika",
        38 => "Nieprawidłowa nazwa",
        39 => "Nieprawidłowy symbol stawki VAT",
        40 => "Nie zaprogramowany nagłówek",
        41 => "Nieprawidłowy numer kasy",
        42 => "Nieprawidłowy numer kasjera",
        43 => "Nieprawidłowy numer paragonu",
        44 => "Nieprawidłowa nazwa klienta",
        45 => "Nieprawidłowy terminal",
        46 => "Nieprawidłowa nazwa karty kredytowej",
        47 => "Nieprawidłowy numer karty kredytowej",
        48 => "Nieprawidłowy miesiąc ważności karty kredytowej",
        49 => "Nieprawidłowy rok ważności karty kredytowej",
        50 => "Nieprawidłowy kod autoryzacyjny",
        51 => "Nieprawidłowa kwota",

        // Codes 52-57 only occur on pharmacy printer variants.
        52 => "Niepusta tablica wycen",
        53 => "Wartość niezgodna z wyceną",
        54 => "Brak wyceny leku",
        55 => "Brak opisu leku",
        56 => "Błąd kwoty OPŁATA",
        57 => "Przepełnienie tablicy wycen",

        58 => "Paragon offline pełny",

        // 59-81 reserved, not currently assigned.
        82 => "Niedozwolony rozkaz",
        83 => "Zła wartość kaucji",
        84 => "Przekroczona liczba wysłanych napisów",

        // 85-999 reserved, not currently assigned.
        1000 => "Błąd inicjalizacji",
        1001 => "Uszkodzenie pamięci RAM",
        1002 => "Paragon już jest rozpoczęty",
        1003 => "Brak identyfikatora stawki PTU",
        1004 => "Nieprawidłowy rabat",
        1005 => "Nieprawidłowe dane",
        1006 => "Drukarka nie jest w trybie fiskalnym",
        1007 => "Nie zaprogramowane stawki PTU",
        1008 => "Pamięć fiskalna pełna",
        1009 => "Nieprawidłowa suma kontrolna pamięci RAM",
        1010 => "Nieprawidłowa suma kontrolna bazy danych",
        1011 => "Nieprawidłowa suma kontrolna nagłówka",
        1012 => "Nieprawidłowa suma kontrolna nazwy kasjera",
        1013 => "Nieprawidłowa suma kontrolna numeru kasy",
        1014 => "Nie powiodło się uaktualnienie danych",
        1015 => "Nie zaprogramowany numer unikatowy",
        1016 => "Brak pamięci fiskalnej",
        1017 => "Brak mechanizmu drukującego",
        1018 => "Brak wyświetlacza",
        1019 => "Pamięć fiskalna została wymieniona",
        1020 => "Identyczne stawki PTU są już zaprogramowane",
        1021 => "Urządzenie jest w trybie tylko do odczytu",
        1022 => "Nierozpoznany rozkaz",
        1023 => "Nieprawidłowy rozkaz",
        1024 => "Nieprawidłowy zakres raportu",
        1025 => "Brak danych raportu w podanym zakresie",
        1026 => "Przepełnienie bufora transmisji",
        1027 => "Niezakończony tryb fiskalny",
        1028 => "Uszkodzenie pamięci fiskalnej",
        1029 => "Przekroczony limit ograniczeń pamięci fiskalnej",
        1030 => "Uszkodzona mapa pamięci fiskalnej",
        1031 => "Rozkaz wysłany w niewłaściwym trybie",
        1032 => "Nieprawidłowy wskaźnik ramki",
        1033 => "Pamięć fiskalna jest zajęta",
        1034 => "Drukarka fiskalna jest zajęta",

        // 1035-1036 reserved, not currently assigned.
        1037 => "Brak papieru",
        1038 => "Błąd zapisu kopii elektronicznej",
        1039 => "Błąd instalacji karty pamięci",
        1040 => "Karta pamięci została zamknięta",
        1041 => "Błąd weryfikacji kopii elektronicznej",
        1042 => "Pamięć podręczna pełna",
        1043 => "Nie zapisano kopii elektronicznej",
        1044 => "Błąd wydruku kopii elektronicznej",
        1045 => "Brak karty",
        1046 => "Brak danych",
        1047 => "Brak gotowości karty",
        1048 => "Błąd zamknięcia karty",
        1049 => "Błąd otwarcia karty",
        1050 => "Błąd pliku id.txt",
        1051 => "Błąd pliku no.txt",
        1052 => "Błąd odtwarzania bazy plików",
        1053 => "Błąd hasła karty pamięci",
        1054 => "Brak dostępu",

        // Not a mistake: the firmware documentation assigns the same
        // message to both 1055 and 1056.
        1055 => "Błąd pamięci podręcznej",
        1056 => "Błąd pamięci podręcznej",

        1057 => "Błąd bazy kart kopii elektronicznej",
        1058 => "Błąd bazy plików kopii elektronicznej",

        // 1059-9998 reserved, not currently assigned.
        9999 => "Błąd fatalny",

        _ => "Nieznany numer błędu",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_code_maps_to_success_message() {
        assert_eq!(lookup(0), "Operacja wykonana pomyślnie");
    }

    #[test]
    fn documented_examples_from_the_spec_match() {
        assert_eq!(lookup(3), "Nieprawidłowa ilość parametrów");
        assert_eq!(lookup(7), "Nieprawidłowa data");
        assert_eq!(lookup(21), "Paragon nie został rozpoczęty");
        assert_eq!(lookup(37), "Anulowane przez użytkownika");
        assert_eq!(lookup(51), "Nieprawidłowa kwota");
        assert_eq!(lookup(1037), "Brak papieru");
        assert_eq!(lookup(1038), "Błąd zapisu kopii elektronicznej");
        assert_eq!(lookup(1042), "Pamięć podręczna pełna");
        assert_eq!(lookup(9999), "Błąd fatalny");
    }

    #[test]
    fn the_documented_1055_1056_duplicate_is_preserved() {
        assert_eq!(lookup(1055), lookup(1056));
    }

    #[test]
    fn reserved_and_unassigned_codes_fall_back_to_unknown() {
        assert_eq!(lookup(70), "Nieznany numer błędu");
        assert_eq!(lookup(1035), "Nieznany numer błędu");
        assert_eq!(lookup(424_242), "Nieznany numer błędu");
    }
}
