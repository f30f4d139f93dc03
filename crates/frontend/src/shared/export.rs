/// Экспорт строк таблицы в CSV и скачивание файла через браузер
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Значение одной ячейки CSV
#[derive(Debug, Clone, PartialEq)]
pub enum CsvField {
    /// Число пишется как есть, без кавычек
    Number(String),
    /// Строка всегда оборачивается в кавычки
    Text(String),
}

/// Trait для типов, которые могут быть экспортированы в CSV
pub trait CsvExportable {
    /// Возвращает массив заголовков колонок
    fn headers() -> Vec<&'static str>;

    /// Преобразует объект в массив значений для CSV
    fn to_csv_row(&self) -> Vec<CsvField>;
}

/// Формирует CSV текст: заголовок и строки через `\n`, разделитель `,`
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(T::headers().join(","));

    for item in data {
        let row: Vec<String> = item.to_csv_row().iter().map(render_field).collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn render_field(field: &CsvField) -> String {
    match field {
        CsvField::Number(value) => value.clone(),
        CsvField::Text(value) => quote(value),
    }
}

/// Оборачивает значение в кавычки, удваивая кавычки внутри
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Экспортирует список данных в CSV файл и инициирует скачивание
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let csv_content = build_csv(data);

    let blob = create_csv_blob(&csv_content)?;
    download_blob(&blob, filename)?;

    log::info!("Exported {} rows to {}", data.len(), filename);
    Ok(())
}

/// Создает Blob объект с CSV данными
fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    // Добавляем в DOM, кликаем и удаляем
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(i64, &'static str);

    impl CsvExportable for Pair {
        fn headers() -> Vec<&'static str> {
            vec!["id", "name"]
        }

        fn to_csv_row(&self) -> Vec<CsvField> {
            vec![
                CsvField::Number(self.0.to_string()),
                CsvField::Text(self.1.to_string()),
            ]
        }
    }

    #[test]
    fn test_quote_doubles_inner_quotes() {
        assert_eq!(quote(r#"A "B""#), r#""A ""B""""#);
        assert_eq!(quote(""), r#""""#);
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[Pair(1, "one"), Pair(2, "t,wo")]);
        assert_eq!(csv, "id,name\n1,\"one\"\n2,\"t,wo\"");
    }

    #[test]
    fn test_build_csv_empty_has_header_only() {
        let rows: Vec<Pair> = Vec::new();
        assert_eq!(build_csv(&rows), "id,name");
    }
}
