//! Fixed word lists that layer-set names, descriptions and tags are
//! sampled from.

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

pub const NAME_PREFIXES: [&str; 20] = [
    "炎龍の",
    "氷霜の",
    "雷神の",
    "岩砕の",
    "風切りの",
    "黒鉄の",
    "星屑の",
    "古代の",
    "蒼穹の",
    "猛毒の",
    "灼熱の",
    "凍結の",
    "雷鳴の",
    "大地の",
    "嵐風の",
    "混沌の",
    "神秘の",
    "金剛の",
    "霧氷の",
    "爆炎の",
];

pub const NAME_SUFFIXES: [&str; 15] = [
    "装束",
    "鎧",
    "重装",
    "アーマー",
    "スーツ",
    "防具",
    "メイル",
    "ガード",
    "プレート",
    "バインド",
    "コート",
    "ローブ",
    "ガーブ",
    "ウェア",
    "クロス",
];

// ---------------------------------------------------------------------------
// Descriptions
// ---------------------------------------------------------------------------

pub const DESCRIPTION_INTRODUCTIONS: [&str; 6] = [
    "この重ね着は、",
    "伝説のハンターが愛用した、",
    "新大陸で発見された素材から作られた、",
    "古代文明の技術を応用した、",
    "長い年月をかけて改良された、",
    "熟練の鍛冶師が作り上げた、",
];

pub const DESCRIPTION_FEATURES: [&str; 6] = [
    "優れた防御力と機動性を兼ね備えた装備です。",
    "独特の輝きを放つ美しい装備セットです。",
    "過酷な環境でも快適に使用できる実用的な防具です。",
    "高いスキル発動率が特徴の上級者向け装備です。",
    "見た目の美しさと機能性を両立させた傑作と言えます。",
    "特殊な素材を使用することで驚異的な耐性を実現しました。",
];

pub const DESCRIPTION_USAGES: [&str; 6] = [
    "氷雪地帯での狩猟に最適です。",
    "火山地帯での高温にも耐えられます。",
    "水中での活動をサポートします。",
    "雷属性モンスターとの戦闘で真価を発揮します。",
    "あらゆる環境で安定したパフォーマンスを発揮します。",
    "長時間の狩猟でも疲労を軽減する効果があります。",
];

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

pub const TAGS: [&str; 33] = [
    // look
    "かっこいい",
    "かわいい",
    "エレガント",
    "ゴージャス",
    "シンプル",
    "クール",
    // weight / availability
    "重装",
    "軽装",
    "実用的",
    "レア",
    "限定",
    "イベント",
    // element
    "火属性",
    "水属性",
    "雷属性",
    "氷属性",
    "龍属性",
    // theme
    "古龍",
    "モンスター",
    "英雄",
    "伝説",
    "神秘",
    "秘伝",
    // audience
    "剣士用",
    "ガンナー用",
    "男性用",
    "女性用",
    "ユニセックス",
    // play style
    "初心者向け",
    "上級者向け",
    "バランス型",
    "攻撃特化",
    "防御特化",
];
