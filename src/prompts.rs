//! Fixed instructional prompts for structured-output requests.
//!
//! The templates ask the model to return ONLY JSON in a given shape. Nothing
//! here can make the model comply; recovery from a non-compliant reply is the
//! extractor's job.

/// Weather prompt for the given coordinates. Missing coordinates are
/// interpolated as `null` rather than rejected, matching the permissive
/// request contract.
pub fn weather_prompt(latitude: Option<f64>, longitude: Option<f64>) -> String {
    let lat = latitude.map_or_else(|| "null".to_string(), |v| v.to_string());
    let lon = longitude.map_or_else(|| "null".to_string(), |v| v.to_string());

    format!(
        r#"You are a weather information service.
Provide the current weather conditions and a 3-day forecast for the location at coordinates {lat}, {lon}.

Return ONLY the data in the following JSON format without any additional text:
{{
  "current": {{
    "temperature": number,
    "condition": string,
    "humidity": number,
    "windSpeed": number
  }},
  "forecast": [
    {{
      "day": string,
      "highTemp": number,
      "lowTemp": number,
      "condition": string
    }},
    {{
      "day": string,
      "highTemp": number,
      "lowTemp": number,
      "condition": string
    }},
    {{
      "day": string,
      "highTemp": number,
      "lowTemp": number,
      "condition": string
    }}
  ]
}}"#
    )
}

/// Weather-news digest prompt: four global weather events plus generative UI
/// hints for rendering them.
pub fn news_prompt() -> &'static str {
    r#"You are a global weather news service with UI generation capabilities.
Provide the latest 4 significant weather events or news from around the world.

Return ONLY the data in the following JSON format without any additional text:
{
  "ui": {
    "layout": string (choose from: "grid", "list", "cards", "timeline"),
    "theme": {
      "primary_color": string (hex color code),
      "secondary_color": string (hex color code),
      "background_color": string (hex color code),
      "text_color": string (hex color code)
    },
    "components": [
      {
        "type": string (choose from: "header", "alert", "info", "chart", "map"),
        "priority": number (1-5, where 1 is highest priority),
        "style": {
          "size": string (choose from: "small", "medium", "large"),
          "emphasis": boolean,
          "border": boolean
        },
        "content": string (brief content for this component)
      }
    ]
  },
  "news": [
    {
      "title": string,
      "summary": string,
      "source": string,
      "date": string (YYYY-MM-DD format),
      "severity": string (choose from: "low", "medium", "high", "critical"),
      "region": string (geographical region affected),
      "visual_type": string (choose from: "chart", "map", "image", "alert")
    }
  ]
}

The "news" array must contain exactly 4 items in the shape shown above.

The news should be real and current, focusing on significant weather events like storms, heat waves,
unusual weather patterns, climate-related events, etc. from different parts of the world.

For the UI section:
- Choose a layout that best fits the current weather news (e.g., "timeline" for sequential events, "grid" for diverse news)
- Select a color theme appropriate for the overall weather situation (e.g., blues for rain, reds for heat waves)
- Create components that would enhance the user experience (e.g., an alert component for severe weather)
- Assign appropriate severity levels to each news item
- Suggest the best visual representation for each news item"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_prompt_interpolates_coordinates() {
        let prompt = weather_prompt(Some(40.7), Some(-74.0));
        assert!(prompt.contains("coordinates 40.7, -74"));
        assert!(prompt.contains("\"forecast\""));
    }

    #[test]
    fn weather_prompt_passes_missing_coordinates_through() {
        let prompt = weather_prompt(None, None);
        assert!(prompt.contains("coordinates null, null"));
    }

    #[test]
    fn news_prompt_requests_four_items() {
        assert!(news_prompt().contains("exactly 4 items"));
        assert!(news_prompt().contains("\"ui\""));
    }
}
