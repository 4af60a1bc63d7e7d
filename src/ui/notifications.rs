use eframe::egui::{self, Align2, Area, Context, Frame, Id, Margin, RichText, Stroke};
use std::time::Duration;

use crate::engine::Notice;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::utils::app_time::{AppInstant, elapsed_between, now};

/// A notice on screen. Non-blocking: the dashboard stays usable underneath.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
    pub raised_at: AppInstant,
}

/// Stack of dismissible, self-expiring notifications in the top-right corner.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn push(&mut self, notice: Notice, raised_at: AppInstant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            notice,
            raised_at,
        });

        let overflow = self
            .toasts
            .len()
            .saturating_sub(UI_CONFIG.max_visible_notices);
        self.toasts.drain(..overflow);
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drops toasts older than `lifetime` as of `at`.
    pub fn expire(&mut self, at: AppInstant, lifetime: Duration) {
        self.toasts
            .retain(|t| elapsed_between(t.raised_at, at) < lifetime);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn lifetime() -> Duration {
        Duration::from_secs(UI_CONFIG.notice_lifetime_secs)
    }

    /// Expire, draw, and apply dismiss clicks. Keeps repainting while anything is shown
    /// so expiry happens without user input.
    pub fn show(&mut self, ctx: &Context) {
        self.expire(now(), Self::lifetime());
        if self.toasts.is_empty() {
            return;
        }

        let mut dismissed = Vec::new();
        Area::new(Id::new("notification_center"))
            .anchor(Align2::RIGHT_TOP, [-12.0, 40.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in self.toasts.iter().rev() {
                    Frame::new()
                        .fill(UI_CONFIG.colors.notice_fill)
                        .stroke(Stroke::new(1.0, UI_CONFIG.colors.notice_border))
                        .inner_margin(Margin::same(8))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(toast.notice.headline())
                                        .strong()
                                        .color(egui::Color32::WHITE),
                                );
                                if ui.small_button(UI_TEXT.dismiss).clicked() {
                                    dismissed.push(toast.id);
                                }
                            });
                            ui.label(RichText::new(&toast.notice.detail).small());
                        });
                    ui.add_space(6.0);
                }
            });

        for id in dismissed {
            self.dismiss(id);
        }
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NoticeKind;

    fn notice(kind: NoticeKind) -> Notice {
        Notice::new(kind, "detail")
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut center = NotificationCenter::default();
        let t0 = now();
        let first = center.push(notice(NoticeKind::BackendUnreachable), t0);
        let second = center.push(notice(NoticeKind::AnalysisFailed), t0);

        assert!(center.dismiss(first));
        assert!(!center.dismiss(first));
        assert_eq!(center.toasts().len(), 1);
        assert_eq!(center.toasts()[0].id, second);
    }

    #[test]
    fn toasts_expire_after_lifetime() {
        let mut center = NotificationCenter::default();
        let t0 = now();
        center.push(notice(NoticeKind::AnalysisFailed), t0);

        center.expire(t0 + Duration::from_secs(1), Duration::from_secs(5));
        assert_eq!(center.toasts().len(), 1);

        center.expire(t0 + Duration::from_secs(6), Duration::from_secs(5));
        assert!(center.is_empty());
    }

    #[test]
    fn oldest_toasts_are_dropped_beyond_capacity() {
        let mut center = NotificationCenter::default();
        let t0 = now();
        let ids: Vec<u64> = (0..UI_CONFIG.max_visible_notices + 2)
            .map(|_| center.push(notice(NoticeKind::AnalysisFailed), t0))
            .collect();

        assert_eq!(center.toasts().len(), UI_CONFIG.max_visible_notices);
        assert_eq!(center.toasts()[0].id, ids[2]);
    }
}
