use crate::logic::RiskEvaluator;
use crate::models::{
    format_date, round_display, FarmInput, RecommendationSet, RiskAlert, Schedule, SessionState,
    WeatherReading,
};
use crate::ui::output::{buffer_lines, print_buffer};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Widget},
};
use std::io;

const EMPTY_MESSAGE: &str = "No farm data yet. Submit the farm form to see recommendations.";

/// Dashboard for one session snapshot.
///
/// Sections mirror the result panels: weather, forecast, recommendations,
/// compatibility, schedule, timeline and risk alerts. Each section has a
/// fixed height derived from its data, so the whole view can be rendered
/// into an off-screen buffer and printed into the scrollback.
#[derive(Clone, Copy)]
pub struct DashboardView<'a> {
    pub state: &'a SessionState,
    pub show_timeline: bool,
}

struct Panels<'a> {
    input: &'a FarmInput,
    weather: &'a WeatherReading,
    recs: &'a RecommendationSet,
    schedule: &'a Schedule,
    alerts: Vec<RiskAlert>,
}

impl<'a> DashboardView<'a> {
    pub fn new(state: &'a SessionState) -> Self {
        Self {
            state,
            show_timeline: true,
        }
    }

    pub fn with_timeline(mut self, show: bool) -> Self {
        self.show_timeline = show;
        self
    }

    fn panels(&self) -> Option<Panels<'a>> {
        let weather = self.state.weather.as_ref()?;
        Some(Panels {
            input: self.state.input.as_ref()?,
            weather,
            recs: self.state.recommendations.as_ref()?,
            schedule: self.state.schedule.as_ref()?,
            alerts: RiskEvaluator::new().evaluate(weather),
        })
    }

    fn section_heights(&self, panels: &Panels<'_>) -> Vec<u16> {
        let recs = &panels.recs.crops;
        let activities = &panels.schedule.activities;

        let top_pick = if recs.is_empty() { 0 } else { 2 };
        let mut heights = vec![
            3,                                               // Header
            3,                                               // Current weather
            panels.weather.forecast_days().len() as u16 + 3, // Forecast + header row
            recs.len() as u16 * 2 + top_pick + 2,            // Crop list
            6,                                               // Compatibility
            activities.len() as u16 + 3,                     // Schedule + header row
        ];
        if self.show_timeline {
            let lines: usize = activities
                .iter()
                .map(|a| if a.details.is_some() { 2 } else { 1 })
                .sum();
            heights.push(lines as u16 + 2);
        }
        heights.push(panels.alerts.len().max(1) as u16 * 2 + 2);
        heights
    }

    /// Total rows needed to render without clipping.
    pub fn height(&self) -> u16 {
        match self.panels() {
            Some(panels) => self.section_heights(&panels).iter().sum(),
            None => 1,
        }
    }

    pub fn to_buffer(&self, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, self.height());
        let mut buf = Buffer::empty(area);
        Widget::render(*self, area, &mut buf);
        buf
    }

    /// Unstyled text, one string per row.
    pub fn render_lines(&self, width: u16) -> Vec<String> {
        buffer_lines(&self.to_buffer(width))
    }

    pub fn render_text(&self, width: u16) -> String {
        self.render_lines(width).join("\n")
    }

    pub fn print(&self, width: u16) -> io::Result<()> {
        print_buffer(&self.to_buffer(width))
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(panels) = self.panels() else {
            Paragraph::new(Span::styled(EMPTY_MESSAGE, Theme::dim())).render(area, buf);
            return;
        };

        let constraints: Vec<Constraint> = self
            .section_heights(&panels)
            .into_iter()
            .map(Constraint::Length)
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        render_header(chunks[0], buf, panels.input);
        render_weather(chunks[1], buf, panels.weather);
        render_forecast(chunks[2], buf, panels.weather);
        render_recommendations(chunks[3], buf, panels.recs, panels.input);
        render_compatibility(chunks[4], buf, panels.recs);
        render_schedule(chunks[5], buf, panels.schedule);
        if self.show_timeline {
            render_timeline(chunks[6], buf, panels.schedule);
        }
        render_alerts(chunks[chunks.len() - 1], buf, &panels.alerts);
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, Theme::header()))
        .borders(Borders::ALL)
        .border_style(Theme::border())
}

fn render_header(area: Rect, buf: &mut Buffer, input: &FarmInput) {
    let block = Block::default()
        .title(Span::styled(
            format!("Farm Advisory: {}", input.location),
            Theme::title(),
        ))
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());

    let info = format!(
        "Soil: {}  |  Season: {}  |  Area: {}",
        input.soil_type, input.season, input.farm_area
    );
    Paragraph::new(Span::styled(info, Theme::dim()))
        .block(block)
        .render(area, buf);
}

fn render_weather(area: Rect, buf: &mut Buffer, weather: &WeatherReading) {
    let temp = weather.temperature_c();
    let line = Line::from(vec![
        Span::styled(
            format!("🌡️ Temperature: {}°C", round_display(temp)),
            Style::default().fg(Theme::temp_color(temp)),
        ),
        Span::styled(
            format!("   💧 Humidity: {}%", weather.humidity_percent()),
            Theme::normal(),
        ),
        Span::styled(
            format!("   🌧️ Rainfall: {}mm", weather.rainfall_mm()),
            Theme::normal(),
        ),
        Span::styled(
            format!("   💨 Wind: {} km/h", round_display(weather.wind_speed())),
            Theme::normal(),
        ),
    ]);
    Paragraph::new(line)
        .block(panel("Current Weather"))
        .render(area, buf);
}

fn render_forecast(area: Rect, buf: &mut Buffer, weather: &WeatherReading) {
    let header = Row::new(
        ["Day", "", "High / Low", "Condition"]
            .iter()
            .map(|h| Cell::from(*h).style(Theme::header())),
    );

    let rows: Vec<Row> = weather
        .forecast_days()
        .iter()
        .map(|day| {
            Row::new(vec![
                Cell::from(day.day_label.as_str()),
                Cell::from(day.condition_icon()),
                Cell::from(format!("{:.0}°C / {:.0}°C", day.temp_max, day.temp_min))
                    .style(Style::default().fg(Theme::temp_color(day.temp_max))),
                Cell::from(day.condition_name()).style(Theme::dim()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(3),
        Constraint::Length(16),
        Constraint::Min(14),
    ];
    Table::new(rows, widths)
        .header(header)
        .block(panel("7-Day Forecast"))
        .render(area, buf);
}

fn render_recommendations(
    area: Rect,
    buf: &mut Buffer,
    recs: &RecommendationSet,
    input: &FarmInput,
) {
    let mut items: Vec<ListItem> = Vec::new();

    if let Some(top) = recs.top_crop() {
        items.push(ListItem::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("Top pick: {} ({}%)", top.name, round_display(top.score)),
                    Theme::highlight(),
                ),
                Span::styled(
                    format!("  Expected yield: {}", top.expected_yield()),
                    Theme::normal(),
                ),
            ]),
            Line::default(),
        ]));
    }

    for crop in &recs.crops {
        let badge = crop
            .season
            .clone()
            .unwrap_or_else(|| input.season.to_uppercase());
        let title = Line::from(vec![
            Span::styled(format!("• {:<12}", crop.name), Theme::normal()),
            Span::styled(format!(" {:>3}%", round_display(crop.score)), Theme::success()),
            Span::styled(format!("  [{}]", badge), Theme::dim()),
        ]);
        let reason = Line::from(Span::styled(format!("  {}", crop.reason()), Theme::dim()));
        items.push(ListItem::new(vec![title, reason]));
    }

    List::new(items)
        .block(panel("Crop Recommendations"))
        .render(area, buf);
}

fn render_compatibility(area: Rect, buf: &mut Buffer, recs: &RecommendationSet) {
    let rows = [
        ("Soil match:     ", recs.soil_compatibility()),
        ("Temperature:    ", recs.temp_range()),
        ("Rainfall:       ", recs.rainfall_range()),
        ("Crop duration:  ", recs.crop_duration()),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(*label, Theme::dim()),
                Span::styled(*value, Theme::normal()),
            ])
        })
        .collect();
    Paragraph::new(lines)
        .block(panel("Compatibility"))
        .render(area, buf);
}

fn render_schedule(area: Rect, buf: &mut Buffer, schedule: &Schedule) {
    let header = Row::new(
        ["Activity", "Date", "Duration", "Details"]
            .iter()
            .map(|h| Cell::from(*h).style(Theme::header())),
    );

    let rows: Vec<Row> = schedule
        .activities
        .iter()
        .map(|activity| {
            Row::new(vec![
                Cell::from(activity.activity.as_str()),
                Cell::from(format_date(activity.recommended_date)).style(Theme::highlight()),
                Cell::from(activity.duration()),
                Cell::from(activity.details()).style(Theme::dim()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(22),
        Constraint::Length(18),
        Constraint::Length(10),
        Constraint::Min(20),
    ];
    Table::new(rows, widths)
        .header(header)
        .block(panel("Farming Schedule"))
        .render(area, buf);
}

fn render_timeline(area: Rect, buf: &mut Buffer, schedule: &Schedule) {
    let items: Vec<ListItem> = schedule
        .activities
        .iter()
        .map(|activity| {
            let mut lines = vec![Line::from(vec![
                Span::styled(format_date(activity.recommended_date), Theme::dim()),
                Span::styled("  ●  ", Theme::success()),
                Span::styled(activity.activity.as_str(), Theme::normal()),
            ])];
            if let Some(details) = activity.details.as_deref() {
                lines.push(Line::from(Span::styled(
                    format!("{:18}│  {}", "", details),
                    Theme::dim(),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    List::new(items).block(panel("Timeline")).render(area, buf);
}

fn render_alerts(area: Rect, buf: &mut Buffer, alerts: &[RiskAlert]) {
    let block = panel("Risk Alerts");

    if alerts.is_empty() {
        let lines = vec![
            Line::from(Span::styled("✅ All Clear", Theme::success())),
            Line::from(Span::styled(
                "   No weather risks detected. Conditions are favorable for farming.",
                Theme::dim(),
            )),
        ];
        Paragraph::new(lines).block(block).render(area, buf);
        return;
    }

    let items: Vec<ListItem> = alerts
        .iter()
        .map(|alert| {
            let style = Theme::severity(alert.severity);
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!(
                        "{} [{}] {}",
                        alert.icon,
                        alert.severity.label(),
                        alert.title
                    ),
                    style,
                )),
                Line::from(Span::styled(format!("   {}", alert.message), Theme::dim())),
            ])
        })
        .collect();

    List::new(items).block(block).render(area, buf);
}
