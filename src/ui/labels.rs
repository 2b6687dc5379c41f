use crate::config::LabelLang;

/// Captions shown to the user, per language.
pub struct Labels {
    pub title: &'static str,
    pub user_filter: &'static str,
    pub month: &'static str,
    pub details: &'static str,
    pub date: &'static str,
    pub clock_in: &'static str,
    pub clock_out: &'static str,
    pub duration: &'static str,
    pub comment: &'static str,
    pub month_total: &'static str,
    pub monthly: &'static str,
    pub month_col: &'static str,
    pub monthly_total: &'static str,
    pub empty_source: &'static str,
    pub no_valid_dates: &'static str,
    pub month_not_found: &'static str,
    pub no_monthly_data: &'static str,
    pub months: &'static str,
}

const JA: Labels = Labels {
    title: "勤務確認",
    user_filter: "ユーザーIDフィルタ適用",
    month: "集計対象の月",
    details: "明細",
    date: "日付",
    clock_in: "出勤時刻",
    clock_out: "退勤時刻",
    duration: "勤務時間",
    comment: "コメント",
    month_total: "選択月の合計勤務時間",
    monthly: "月次集計（全体の参考）",
    month_col: "月",
    monthly_total: "合計勤務時間",
    empty_source: "シートにデータがありません。",
    no_valid_dates: "有効な日付が存在しないため、月選択ができません。",
    month_not_found: "指定された月のデータがありません",
    no_monthly_data: "集計対象データがありません。",
    months: "選択可能な月",
};

const EN: Labels = Labels {
    title: "Attendance",
    user_filter: "User ID filter applied",
    month: "Reported month",
    details: "Details",
    date: "Date",
    clock_in: "Clock-in",
    clock_out: "Clock-out",
    duration: "Worked",
    comment: "Comment",
    month_total: "Total worked in selected month",
    monthly: "Monthly totals (all months)",
    month_col: "Month",
    monthly_total: "Total worked",
    empty_source: "The sheet contains no data.",
    no_valid_dates: "No valid dates found: month selection is not available.",
    month_not_found: "No rows for the requested month",
    no_monthly_data: "Nothing to aggregate.",
    months: "Available months",
};

impl Labels {
    pub fn for_lang(lang: LabelLang) -> &'static Labels {
        match lang {
            LabelLang::Ja => &JA,
            LabelLang::En => &EN,
        }
    }

    /// Headers of the detail table; the comment column only when present.
    pub fn detail_headers(&self, with_comment: bool) -> Vec<&'static str> {
        let mut h = vec![self.date, self.clock_in, self.clock_out, self.duration];
        if with_comment {
            h.push(self.comment);
        }
        h
    }

    pub fn monthly_headers(&self) -> Vec<&'static str> {
        vec![self.month_col, self.monthly_total]
    }
}
