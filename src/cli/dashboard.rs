use std::io::IsTerminal;

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::fmt::number;
use crate::models::{Category, Classification, DayType, Daypart};
use crate::reports::{self, DayTypeComparison, ItemCount};
use crate::settings::load_settings;
use crate::tui::{
    count_span, run_view, View, ViewAction, EMPTY_STYLE, FOOTER_STYLE, HEADER_STYLE,
    LEADER_STYLE, SELECTED_STYLE, TRAILER_STYLE,
};

use super::load_dataset;
use super::text::{format_all_categories, format_all_dayparts, format_daytype, verdict};

const TAB_TITLES: &[&str] = &[" Top items by time of day ", " Weekday vs Weekend "];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    TopItems,
    DayType,
}

impl Tab {
    fn index(self) -> usize {
        match self {
            Self::TopItems => 0,
            Self::DayType => 1,
        }
    }

    fn toggle(self) -> Self {
        match self {
            Self::TopItems => Self::DayType,
            Self::DayType => Self::TopItems,
        }
    }
}

pub struct Dashboard<'a> {
    dataset: &'a Dataset,
    tab: Tab,
    daypart: Daypart,
    category_idx: usize,
    sub_idx: usize,
    daypart_limit: usize,
    category_limit: usize,
    daypart_top: Vec<ItemCount>,
    category_top: Vec<ItemCount>,
    comparison: DayTypeComparison,
}

impl<'a> Dashboard<'a> {
    pub fn new(dataset: &'a Dataset, daypart_limit: usize, category_limit: usize) -> Self {
        let mut dashboard = Self {
            dataset,
            tab: Tab::TopItems,
            daypart: Daypart::Morning,
            category_idx: 0,
            sub_idx: 0,
            daypart_limit,
            category_limit,
            daypart_top: Vec::new(),
            category_top: Vec::new(),
            comparison: reports::compare_weekend_vs_weekday(dataset),
        };
        dashboard.refresh_daypart();
        dashboard.refresh_category();
        dashboard
    }

    fn category(&self) -> Category {
        Category::PICKABLE[self.category_idx]
    }

    fn class(&self) -> Classification {
        self.category().sub_categories()[self.sub_idx]
    }

    fn refresh_daypart(&mut self) {
        self.daypart_top = reports::top_items_by_daypart(self.dataset, self.daypart, self.daypart_limit);
    }

    fn refresh_category(&mut self) {
        self.category_top = reports::top_items_by_category(self.dataset, self.class(), self.category_limit);
    }

    fn set_daypart(&mut self, daypart: Daypart) {
        self.daypart = daypart;
        self.refresh_daypart();
    }

    fn next_category(&mut self) {
        self.category_idx = (self.category_idx + 1) % Category::PICKABLE.len();
        self.sub_idx = 0;
        self.refresh_category();
    }

    fn step_sub_category(&mut self, forward: bool) {
        let n = self.category().sub_categories().len();
        self.sub_idx = if forward {
            (self.sub_idx + 1) % n
        } else {
            (self.sub_idx + n - 1) % n
        };
        self.refresh_category();
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    fn draw_top_items(&self, frame: &mut Frame, area: Rect) {
        let [left, right] = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .areas(area);

        // Time of day
        let [daypart_picker, daypart_table] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(left);

        let mut spans = vec![Span::styled(" Time of day: ", Style::new().add_modifier(Modifier::BOLD))];
        for d in Daypart::ALL {
            let style = if d == self.daypart { SELECTED_STYLE } else { Style::new() };
            spans.push(Span::styled(format!(" {} ", d.label()), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), daypart_picker);
        render_ranking(
            frame,
            daypart_table,
            &format!(" Top {} in the {} ", self.daypart_limit, self.daypart),
            &self.daypart_top,
            &format!("No sales recorded in the {}.", self.daypart.label().to_lowercase()),
        );

        // Category
        let [category_picker, sub_picker, category_table] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(right);

        let mut cat_spans = vec![Span::styled(" Category: ", Style::new().add_modifier(Modifier::BOLD))];
        for c in Category::PICKABLE {
            let style = if c == self.category() { SELECTED_STYLE } else { Style::new() };
            cat_spans.push(Span::styled(format!(" {} ", c.label()), style));
        }
        frame.render_widget(Paragraph::new(Line::from(cat_spans)), category_picker);

        let mut sub_spans = vec![Span::styled(" Type:     ", Style::new().add_modifier(Modifier::BOLD))];
        for class in self.category().sub_categories() {
            let style = if *class == self.class() { SELECTED_STYLE } else { Style::new() };
            sub_spans.push(Span::styled(format!(" {} ", class.sub_label()), style));
        }
        frame.render_widget(Paragraph::new(Line::from(sub_spans)), sub_picker);

        render_ranking(
            frame,
            category_table,
            &format!(" Top {}: {} ", self.category_limit, self.class()),
            &self.category_top,
            &format!("No {} items sold.", self.class()),
        );
    }

    fn draw_daytype(&self, frame: &mut Frame, area: Rect) {
        let [chart_area, metrics_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(4),
        ])
        .areas(area);

        let counts = self.comparison.counts();
        let bars: Vec<Bar> = DayType::ALL
            .into_iter()
            .map(|day_type| {
                let count = counts.get(day_type);
                let style = if day_type == self.comparison.winner {
                    LEADER_STYLE
                } else {
                    TRAILER_STYLE
                };
                Bar::default()
                    .value(count as u64)
                    .text_value(number(count))
                    .label(Line::from(day_type.label()))
                    .style(style)
            })
            .collect();

        let block = Block::default()
            .title(" Distinct transactions ")
            .title_style(Style::new().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL);
        let chart = BarChart::default()
            .block(block)
            .bar_width(12)
            .bar_gap(6)
            .max(counts.max().max(1) as u64)
            .data(BarGroup::default().bars(&bars));
        frame.render_widget(chart, chart_area);

        let lines = vec![
            Line::from(vec![Span::raw(" Weekend transactions: "), count_span(self.comparison.weekend)]),
            Line::from(vec![Span::raw(" Weekday transactions: "), count_span(self.comparison.weekday)]),
            Line::from(""),
            Line::from(Span::styled(format!(" {}", verdict(&self.comparison)), HEADER_STYLE)),
        ];
        frame.render_widget(Paragraph::new(lines), metrics_area);
    }
}

fn render_ranking(frame: &mut Frame, area: Rect, title: &str, items: &[ItemCount], empty_text: &str) {
    let block = Block::default()
        .title(title.to_string())
        .title_style(Style::new().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL);

    if items.is_empty() {
        let para = Paragraph::new(Span::styled(format!(" {empty_text}"), EMPTY_STYLE)).block(block);
        frame.render_widget(para, area);
        return;
    }

    let rows: Vec<Row> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Row::new(vec![
                Cell::from(format!("{:>2}", i + 1)),
                Cell::from(item.item.clone()),
                Cell::from(format!("{:>8}", number(item.count))),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [Constraint::Length(3), Constraint::Fill(1), Constraint::Length(8)],
    )
    .header(Row::new(vec!["#", "Item", "    Sold"]).style(HEADER_STYLE))
    .block(block);
    frame.render_widget(table, area);
}

impl View for Dashboard<'_> {
    fn draw(&mut self, frame: &mut Frame) {
        let [tabs_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let tabs = Tabs::new(TAB_TITLES.iter().copied())
            .select(self.tab.index())
            .highlight_style(HEADER_STYLE.add_modifier(Modifier::REVERSED))
            .divider("|");
        frame.render_widget(tabs, tabs_area);

        match self.tab {
            Tab::TopItems => self.draw_top_items(frame, body_area),
            Tab::DayType => self.draw_daytype(frame, body_area),
        }

        let hints = match self.tab {
            Tab::TopItems => " Tab switch view  \u{2190}/\u{2192} time of day  c category  \u{2191}/\u{2193} type  q quit",
            Tab::DayType => " Tab switch view  q quit",
        };
        frame.render_widget(Paragraph::new(Span::styled(hints, FOOTER_STYLE)), footer_area);
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return ViewAction::Close,
            KeyCode::Tab | KeyCode::BackTab => self.tab = self.tab.toggle(),
            KeyCode::Char('1') => self.tab = Tab::TopItems,
            KeyCode::Char('2') => self.tab = Tab::DayType,
            _ if self.tab == Tab::TopItems => match code {
                KeyCode::Left | KeyCode::Char('h') => self.set_daypart(self.daypart.prev()),
                KeyCode::Right | KeyCode::Char('l') => self.set_daypart(self.daypart.next()),
                KeyCode::Char('c') => self.next_category(),
                KeyCode::Down | KeyCode::Char('j') => self.step_sub_category(true),
                KeyCode::Up | KeyCode::Char('k') => self.step_sub_category(false),
                _ => {}
            },
            _ => {}
        }
        ViewAction::Continue
    }
}

/// Both views as plain text, for when stdout is not a terminal.
pub fn render_text(ds: &Dataset, daypart_limit: usize, category_limit: usize) -> String {
    let cmp = reports::compare_weekend_vs_weekday(ds);
    format!(
        "{}\n\n{}\n\n{}",
        format_all_dayparts(ds, daypart_limit),
        format_all_categories(ds, category_limit),
        format_daytype(&cmp)
    )
}

pub fn run(file: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let (ds, _) = load_dataset(file)?;

    if !std::io::stdout().is_terminal() {
        println!("{}", render_text(&ds, settings.daypart_limit, settings.category_limit));
        return Ok(());
    }

    let mut dashboard = Dashboard::new(&ds, settings.daypart_limit, settings.category_limit);
    run_view(&mut dashboard)
}
