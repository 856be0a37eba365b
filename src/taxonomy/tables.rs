//! Built-in herb tables for the three source taxonomies.
//!
//! Each table is an ordered slice; merge order follows slice order. These are
//! the defaults behind [`Taxonomy::builtin`](super::Taxonomy::builtin) and can be
//! replaced wholesale with a JSON file via [`Taxonomy::load`](super::Taxonomy::load).

/// One row of an embedded taxonomy table
#[derive(Debug, Clone, Copy)]
pub struct StaticHerb {
    pub name: &'static str,
    pub scientific_name: Option<&'static str>,
    pub common_names: &'static [&'static str],
    pub sanskrit_name: Option<&'static str>,
    pub pinyin_name: Option<&'static str>,
    pub chinese_name: Option<&'static str>,
}

// ============================================================================
// WESTERN HERBAL MEDICINE (58 entries)
// ============================================================================

pub static WESTERN_HERBS: &[StaticHerb] = &[
    StaticHerb { name: "St. John's Wort", scientific_name: Some("Hypericum perforatum"), common_names: &["St Johns Wort", "Hypericum", "Klamath Weed"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Valerian Root", scientific_name: Some("Valeriana officinalis"), common_names: &["Valerian", "Garden Heliotrope"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Kava", scientific_name: Some("Piper methysticum"), common_names: &["Kava Kava", "Awa"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Ginseng", scientific_name: Some("Panax ginseng"), common_names: &["Asian Ginseng", "Korean Ginseng", "Ren Shen"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Chamomile", scientific_name: Some("Matricaria chamomilla"), common_names: &["German Chamomile", "Blue Chamomile"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Ginkgo Biloba", scientific_name: Some("Ginkgo biloba"), common_names: &["Ginkgo", "Maidenhair Tree"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Passionflower", scientific_name: Some("Passiflora incarnata"), common_names: &["Passiflora", "Maypop"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Feverfew", scientific_name: Some("Tanacetum parthenium"), common_names: &["Featherfew", "Bachelor's Buttons"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Butterbur", scientific_name: Some("Petasites hybridus"), common_names: &["Petasites", "Bog Rhubarb"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Skullcap", scientific_name: Some("Scutellaria lateriflora"), common_names: &["American Skullcap", "Blue Skullcap"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Lemon Balm", scientific_name: Some("Melissa officinalis"), common_names: &["Melissa", "Balm"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Hops", scientific_name: Some("Humulus lupulus"), common_names: &["Common Hops"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Wild Yam", scientific_name: Some("Dioscorea villosa"), common_names: &["Colic Root", "Devil's Bones"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Dong Quai", scientific_name: Some("Angelica sinensis"), common_names: &["Female Ginseng", "Dang Gui"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Evening Primrose", scientific_name: Some("Oenothera biennis"), common_names: &["Evening Star", "Sun Drop"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Boswellia", scientific_name: Some("Boswellia serrata"), common_names: &["Indian Frankincense", "Salai Guggal"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Devil's Claw", scientific_name: Some("Harpagophytum procumbens"), common_names: &["Grapple Plant", "Wood Spider"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Cat's Claw", scientific_name: Some("Uncaria tomentosa"), common_names: &["Una de Gato", "Cats Claw"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Rhodiola", scientific_name: Some("Rhodiola rosea"), common_names: &["Golden Root", "Arctic Root"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Schisandra", scientific_name: Some("Schisandra chinensis"), common_names: &["Five Flavor Berry", "Wu Wei Zi"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Astragalus", scientific_name: Some("Astragalus membranaceus"), common_names: &["Huang Qi", "Milk Vetch"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Eleuthero", scientific_name: Some("Eleutherococcus senticosus"), common_names: &["Siberian Ginseng", "Ci Wu Jia"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Maca", scientific_name: Some("Lepidium meyenii"), common_names: &["Peruvian Ginseng", "Maca Root"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Tribulus", scientific_name: Some("Tribulus terrestris"), common_names: &["Puncture Vine", "Gokshura"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Fenugreek", scientific_name: Some("Trigonella foenum-graecum"), common_names: &["Greek Hay", "Methi"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Gymnema", scientific_name: Some("Gymnema sylvestre"), common_names: &["Gurmar", "Sugar Destroyer"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Bitter Melon", scientific_name: Some("Momordica charantia"), common_names: &["Bitter Gourd", "Karela"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Berberine", scientific_name: Some("Berberis vulgaris"), common_names: &["Barberry", "European Barberry"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Goldenseal", scientific_name: Some("Hydrastis canadensis"), common_names: &["Orange Root", "Yellow Puccoon"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Oregon Grape", scientific_name: Some("Mahonia aquifolium"), common_names: &["Mountain Grape", "Holly Grape"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Uva Ursi", scientific_name: Some("Arctostaphylos uva-ursi"), common_names: &["Bearberry", "Kinnikinnick"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Cranberry", scientific_name: Some("Vaccinium macrocarpon"), common_names: &["American Cranberry", "Large Cranberry"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Nettle", scientific_name: Some("Urtica dioica"), common_names: &["Stinging Nettle", "Common Nettle"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Dandelion", scientific_name: Some("Taraxacum officinale"), common_names: &["Lion's Tooth", "Blowball"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Burdock", scientific_name: Some("Arctium lappa"), common_names: &["Greater Burdock", "Gobo"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Yellow Dock", scientific_name: Some("Rumex crispus"), common_names: &["Curled Dock", "Curly Dock"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Red Clover", scientific_name: Some("Trifolium pratense"), common_names: &["Purple Clover", "Meadow Clover"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Vitex", scientific_name: Some("Vitex agnus-castus"), common_names: &["Chaste Tree", "Monk's Pepper"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Motherwort", scientific_name: Some("Leonurus cardiaca"), common_names: &["Lion's Tail", "Throw-wort"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Yarrow", scientific_name: Some("Achillea millefolium"), common_names: &["Common Yarrow", "Nosebleed Plant"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Calendula", scientific_name: Some("Calendula officinalis"), common_names: &["Pot Marigold", "Garden Marigold"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Arnica", scientific_name: Some("Arnica montana"), common_names: &["Mountain Arnica", "Wolf's Bane"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Comfrey", scientific_name: Some("Symphytum officinale"), common_names: &["Knitbone", "Boneset"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Plantain", scientific_name: Some("Plantago major"), common_names: &["Broadleaf Plantain", "Greater Plantain"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Slippery Elm", scientific_name: Some("Ulmus rubra"), common_names: &["Red Elm", "Indian Elm"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Marshmallow", scientific_name: Some("Althaea officinalis"), common_names: &["Marsh Mallow", "White Mallow"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Licorice", scientific_name: Some("Glycyrrhiza glabra"), common_names: &["Sweet Root", "Gan Cao"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Fennel", scientific_name: Some("Foeniculum vulgare"), common_names: &["Sweet Fennel", "Florence Fennel"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Caraway", scientific_name: Some("Carum carvi"), common_names: &["Meridian Fennel", "Persian Cumin"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Anise", scientific_name: Some("Pimpinella anisum"), common_names: &["Aniseed", "Sweet Cumin"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Cardamom", scientific_name: Some("Elettaria cardamomum"), common_names: &["Green Cardamom", "True Cardamom"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Cinnamon", scientific_name: Some("Cinnamomum verum"), common_names: &["True Cinnamon", "Ceylon Cinnamon"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Clove", scientific_name: Some("Syzygium aromaticum"), common_names: &["Cloves", "Lavang"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Oregano", scientific_name: Some("Origanum vulgare"), common_names: &["Wild Marjoram", "Common Oregano"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Thyme", scientific_name: Some("Thymus vulgaris"), common_names: &["Common Thyme", "Garden Thyme"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Rosemary", scientific_name: Some("Rosmarinus officinalis"), common_names: &["Compass Plant", "Polar Plant"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Sage", scientific_name: Some("Salvia officinalis"), common_names: &["Common Sage", "Garden Sage"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Holy Basil", scientific_name: Some("Ocimum tenuiflorum"), common_names: &["Tulsi", "Sacred Basil"], sanskrit_name: None, pinyin_name: None, chinese_name: None },
];

// ============================================================================
// AYURVEDA (32 entries)
// ============================================================================

pub static AYURVEDIC_HERBS: &[StaticHerb] = &[
    StaticHerb { name: "Ashwagandha", scientific_name: Some("Withania somnifera"), common_names: &["Indian Ginseng", "Winter Cherry"], sanskrit_name: Some("अश्वगंधा"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Tulsi", scientific_name: Some("Ocimum tenuiflorum"), common_names: &["Holy Basil", "Sacred Basil"], sanskrit_name: Some("तुलसी"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Brahmi", scientific_name: Some("Bacopa monnieri"), common_names: &["Water Hyssop", "Bacopa"], sanskrit_name: Some("ब्राह्मी"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Shatavari", scientific_name: Some("Asparagus racemosus"), common_names: &["Wild Asparagus", "Satavari"], sanskrit_name: Some("शतावरी"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Triphala", scientific_name: Some("Combination formula"), common_names: &["Three Fruits"], sanskrit_name: Some("त्रिफला"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Amalaki", scientific_name: Some("Phyllanthus emblica"), common_names: &["Amla", "Indian Gooseberry"], sanskrit_name: Some("आमलकी"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Haritaki", scientific_name: Some("Terminalia chebula"), common_names: &["Chebulic Myrobalan", "Black Myrobalan"], sanskrit_name: Some("हरीतकी"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Bibhitaki", scientific_name: Some("Terminalia bellirica"), common_names: &["Bahera", "Beleric Myrobalan"], sanskrit_name: Some("बिभीतकी"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Guduchi", scientific_name: Some("Tinospora cordifolia"), common_names: &["Giloy", "Heart-leaved Moonseed"], sanskrit_name: Some("गुडूची"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Neem", scientific_name: Some("Azadirachta indica"), common_names: &["Indian Lilac", "Margosa"], sanskrit_name: Some("निम्ब"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Turmeric", scientific_name: Some("Curcuma longa"), common_names: &["Haridra", "Indian Saffron"], sanskrit_name: Some("हरिद्रा"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Ginger", scientific_name: Some("Zingiber officinale"), common_names: &["Shunti", "Adrak"], sanskrit_name: Some("शुण्ठी"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Black Pepper", scientific_name: Some("Piper nigrum"), common_names: &["Maricha", "Kali Mirch"], sanskrit_name: Some("मरिच"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Long Pepper", scientific_name: Some("Piper longum"), common_names: &["Pippali", "Indian Long Pepper"], sanskrit_name: Some("पिप्पली"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Trikatu", scientific_name: Some("Combination formula"), common_names: &["Three Pungents", "Three Spices"], sanskrit_name: Some("त्रिकटु"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Guggulu", scientific_name: Some("Commiphora mukul"), common_names: &["Indian Bdellium", "Guggul"], sanskrit_name: Some("गुग्गुलु"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Shilajit", scientific_name: Some("Mineral pitch"), common_names: &["Mineral Pitch", "Asphaltum"], sanskrit_name: Some("शिलाजीत"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Arjuna", scientific_name: Some("Terminalia arjuna"), common_names: &["Arjun", "White Marudah"], sanskrit_name: Some("अर्जुन"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Punarnava", scientific_name: Some("Boerhavia diffusa"), common_names: &["Hogweed", "Red Spiderling"], sanskrit_name: Some("पुनर्नवा"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Bhringaraj", scientific_name: Some("Eclipta prostrata"), common_names: &["False Daisy", "Eclipta"], sanskrit_name: Some("भृङ्गराज"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Shankhpushpi", scientific_name: Some("Convolvulus pluricaulis"), common_names: &["Morning Glory", "Speed Wheel"], sanskrit_name: Some("शंखपुष्पी"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Jatamansi", scientific_name: Some("Nardostachys jatamansi"), common_names: &["Spikenard", "Muskroot"], sanskrit_name: Some("जटामांसी"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Vacha", scientific_name: Some("Acorus calamus"), common_names: &["Calamus", "Sweet Flag"], sanskrit_name: Some("वचा"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Kutki", scientific_name: Some("Picrorhiza kurroa"), common_names: &["Katuki", "Kutki"], sanskrit_name: Some("कुटकी"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Chirata", scientific_name: Some("Swertia chirata"), common_names: &["Chirayata", "Indian Gentian"], sanskrit_name: Some("चिरायता"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Vidanga", scientific_name: Some("Embelia ribes"), common_names: &["False Black Pepper", "Embelia"], sanskrit_name: Some("विडङ्ग"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Bakuchi", scientific_name: Some("Psoralea corylifolia"), common_names: &["Babchi", "Scurfy Pea"], sanskrit_name: Some("बाकुची"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Manjistha", scientific_name: Some("Rubia cordifolia"), common_names: &["Indian Madder", "Manjishtha"], sanskrit_name: Some("मञ्जिष्ठा"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Sariva", scientific_name: Some("Hemidesmus indicus"), common_names: &["Indian Sarsaparilla", "Anantmool"], sanskrit_name: Some("सारिवा"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Gokshura", scientific_name: Some("Tribulus terrestris"), common_names: &["Puncture Vine", "Gokhru"], sanskrit_name: Some("गोक्षुर"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Kapikacchu", scientific_name: Some("Mucuna pruriens"), common_names: &["Mucuna", "Velvet Bean", "Cowhage"], sanskrit_name: Some("कपिकच्छू"), pinyin_name: None, chinese_name: None },
    StaticHerb { name: "Safed Musli", scientific_name: Some("Chlorophytum borivilianum"), common_names: &["White Musli", "Musli"], sanskrit_name: Some("सफेद मुसली"), pinyin_name: None, chinese_name: None },
];

// ============================================================================
// TRADITIONAL CHINESE MEDICINE (39 entries)
// ============================================================================

pub static TCM_HERBS: &[StaticHerb] = &[
    StaticHerb { name: "Ren Shen", scientific_name: Some("Panax ginseng"), common_names: &["Ginseng", "Asian Ginseng", "Korean Ginseng"], sanskrit_name: None, pinyin_name: Some("Rén Shēn"), chinese_name: Some("人参") },
    StaticHerb { name: "Huang Qi", scientific_name: Some("Astragalus membranaceus"), common_names: &["Astragalus", "Milk Vetch Root"], sanskrit_name: None, pinyin_name: Some("Huáng Qí"), chinese_name: Some("黄芪") },
    StaticHerb { name: "Gan Cao", scientific_name: Some("Glycyrrhiza uralensis"), common_names: &["Licorice", "Chinese Licorice"], sanskrit_name: None, pinyin_name: Some("Gān Cǎo"), chinese_name: Some("甘草") },
    StaticHerb { name: "Sheng Jiang", scientific_name: Some("Zingiber officinale"), common_names: &["Fresh Ginger", "Ginger"], sanskrit_name: None, pinyin_name: Some("Shēng Jiāng"), chinese_name: Some("生姜") },
    StaticHerb { name: "Gan Jiang", scientific_name: Some("Zingiber officinale"), common_names: &["Dried Ginger", "Dry Ginger"], sanskrit_name: None, pinyin_name: Some("Gān Jiāng"), chinese_name: Some("干姜") },
    StaticHerb { name: "Rou Gui", scientific_name: Some("Cinnamomum cassia"), common_names: &["Cinnamon Bark", "Cassia Bark"], sanskrit_name: None, pinyin_name: Some("Ròu Guì"), chinese_name: Some("肉桂") },
    StaticHerb { name: "Gui Zhi", scientific_name: Some("Cinnamomum cassia"), common_names: &["Cinnamon Twig", "Cassia Twig"], sanskrit_name: None, pinyin_name: Some("Guì Zhī"), chinese_name: Some("桂枝") },
    StaticHerb { name: "Bai Shao", scientific_name: Some("Paeonia lactiflora"), common_names: &["White Peony Root", "Peony"], sanskrit_name: None, pinyin_name: Some("Bái Sháo"), chinese_name: Some("白芍") },
    StaticHerb { name: "Chi Shao", scientific_name: Some("Paeonia lactiflora"), common_names: &["Red Peony Root", "Red Peony"], sanskrit_name: None, pinyin_name: Some("Chì Sháo"), chinese_name: Some("赤芍") },
    StaticHerb { name: "Di Huang", scientific_name: Some("Rehmannia glutinosa"), common_names: &["Rehmannia", "Chinese Foxglove"], sanskrit_name: None, pinyin_name: Some("Dì Huáng"), chinese_name: Some("地黄") },
    StaticHerb { name: "Shu Di Huang", scientific_name: Some("Rehmannia glutinosa"), common_names: &["Prepared Rehmannia", "Cooked Rehmannia"], sanskrit_name: None, pinyin_name: Some("Shú Dì Huáng"), chinese_name: Some("熟地黄") },
    StaticHerb { name: "Dang Gui", scientific_name: Some("Angelica sinensis"), common_names: &["Angelica", "Dong Quai", "Female Ginseng"], sanskrit_name: None, pinyin_name: Some("Dāng Guī"), chinese_name: Some("当归") },
    StaticHerb { name: "Chuan Xiong", scientific_name: Some("Ligusticum chuanxiong"), common_names: &["Ligusticum", "Szechuan Lovage"], sanskrit_name: None, pinyin_name: Some("Chuān Xiōng"), chinese_name: Some("川芎") },
    StaticHerb { name: "Bai Zhu", scientific_name: Some("Atractylodes macrocephala"), common_names: &["Atractylodes", "White Atractylodes"], sanskrit_name: None, pinyin_name: Some("Bái Zhú"), chinese_name: Some("白术") },
    StaticHerb { name: "Fu Ling", scientific_name: Some("Poria cocos"), common_names: &["Poria", "Hoelen", "China Root"], sanskrit_name: None, pinyin_name: Some("Fú Líng"), chinese_name: Some("茯苓") },
    StaticHerb { name: "Dang Shen", scientific_name: Some("Codonopsis pilosula"), common_names: &["Codonopsis", "Poor Man's Ginseng"], sanskrit_name: None, pinyin_name: Some("Dǎng Shēn"), chinese_name: Some("党参") },
    StaticHerb { name: "Wu Wei Zi", scientific_name: Some("Schisandra chinensis"), common_names: &["Schisandra", "Five Flavor Berry"], sanskrit_name: None, pinyin_name: Some("Wǔ Wèi Zǐ"), chinese_name: Some("五味子") },
    StaticHerb { name: "Mai Men Dong", scientific_name: Some("Ophiopogon japonicus"), common_names: &["Ophiopogon", "Dwarf Lilyturf"], sanskrit_name: None, pinyin_name: Some("Mài Mén Dōng"), chinese_name: Some("麦门冬") },
    StaticHerb { name: "Yu Zhu", scientific_name: Some("Polygonatum odoratum"), common_names: &["Polygonatum", "Solomon's Seal"], sanskrit_name: None, pinyin_name: Some("Yù Zhú"), chinese_name: Some("玉竹") },
    StaticHerb { name: "Gou Qi Zi", scientific_name: Some("Lycium barbarum"), common_names: &["Lycium", "Goji Berry", "Wolfberry"], sanskrit_name: None, pinyin_name: Some("Gǒu Qǐ Zǐ"), chinese_name: Some("枸杞子") },
    StaticHerb { name: "Ju Hua", scientific_name: Some("Chrysanthemum morifolium"), common_names: &["Chrysanthemum", "Florist's Daisy"], sanskrit_name: None, pinyin_name: Some("Jú Huā"), chinese_name: Some("菊花") },
    StaticHerb { name: "Jin Yin Hua", scientific_name: Some("Lonicera japonica"), common_names: &["Honeysuckle", "Japanese Honeysuckle"], sanskrit_name: None, pinyin_name: Some("Jīn Yín Huā"), chinese_name: Some("金银花") },
    StaticHerb { name: "Lian Qiao", scientific_name: Some("Forsythia suspensa"), common_names: &["Forsythia", "Weeping Forsythia"], sanskrit_name: None, pinyin_name: Some("Lián Qiào"), chinese_name: Some("连翘") },
    StaticHerb { name: "Huang Qin", scientific_name: Some("Scutellaria baicalensis"), common_names: &["Scutellaria", "Baikal Skullcap"], sanskrit_name: None, pinyin_name: Some("Huáng Qín"), chinese_name: Some("黄芩") },
    StaticHerb { name: "Huang Lian", scientific_name: Some("Coptis chinensis"), common_names: &["Coptis", "Chinese Goldthread"], sanskrit_name: None, pinyin_name: Some("Huáng Lián"), chinese_name: Some("黄连") },
    StaticHerb { name: "Huang Bai", scientific_name: Some("Phellodendron amurense"), common_names: &["Phellodendron", "Amur Cork Tree"], sanskrit_name: None, pinyin_name: Some("Huáng Bǎi"), chinese_name: Some("黄柏") },
    StaticHerb { name: "Chai Hu", scientific_name: Some("Bupleurum chinense"), common_names: &["Bupleurum", "Hare's Ear"], sanskrit_name: None, pinyin_name: Some("Chái Hú"), chinese_name: Some("柴胡") },
    StaticHerb { name: "Dan Shen", scientific_name: Some("Salvia miltiorrhiza"), common_names: &["Salvia", "Red Sage"], sanskrit_name: None, pinyin_name: Some("Dān Shēn"), chinese_name: Some("丹参") },
    StaticHerb { name: "Hong Hua", scientific_name: Some("Carthamus tinctorius"), common_names: &["Safflower", "Carthamus"], sanskrit_name: None, pinyin_name: Some("Hóng Huā"), chinese_name: Some("红花") },
    StaticHerb { name: "Tao Ren", scientific_name: Some("Prunus persica"), common_names: &["Peach Kernel", "Peach Seed"], sanskrit_name: None, pinyin_name: Some("Táo Rén"), chinese_name: Some("桃仁") },
    StaticHerb { name: "Da Zao", scientific_name: Some("Ziziphus jujuba"), common_names: &["Red Dates", "Chinese Date", "Jujube"], sanskrit_name: None, pinyin_name: Some("Dà Zǎo"), chinese_name: Some("大枣") },
    StaticHerb { name: "Long Yan Rou", scientific_name: Some("Dimocarpus longan"), common_names: &["Longan", "Dragon Eye"], sanskrit_name: None, pinyin_name: Some("Lóng Yǎn Ròu"), chinese_name: Some("龙眼肉") },
    StaticHerb { name: "Suan Zao Ren", scientific_name: Some("Ziziphus jujuba var. spinosa"), common_names: &["Ziziphus", "Sour Jujube Seed"], sanskrit_name: None, pinyin_name: Some("Suān Zǎo Rén"), chinese_name: Some("酸枣仁") },
    StaticHerb { name: "Ma Huang", scientific_name: Some("Ephedra sinica"), common_names: &["Ephedra", "Ma Huang"], sanskrit_name: None, pinyin_name: Some("Má Huáng"), chinese_name: Some("麻黄") },
    StaticHerb { name: "Hou Po", scientific_name: Some("Magnolia officinalis"), common_names: &["Magnolia Bark", "Magnolia"], sanskrit_name: None, pinyin_name: Some("Hòu Pò"), chinese_name: Some("厚朴") },
    StaticHerb { name: "Ban Xia", scientific_name: Some("Pinellia ternata"), common_names: &["Pinellia", "Pinellia Tuber"], sanskrit_name: None, pinyin_name: Some("Bàn Xià"), chinese_name: Some("半夏") },
    StaticHerb { name: "Chen Pi", scientific_name: Some("Citrus reticulata"), common_names: &["Citrus Peel", "Tangerine Peel"], sanskrit_name: None, pinyin_name: Some("Chén Pí"), chinese_name: Some("陈皮") },
    StaticHerb { name: "Jie Geng", scientific_name: Some("Platycodon grandiflorus"), common_names: &["Platycodon", "Balloon Flower"], sanskrit_name: None, pinyin_name: Some("Jié Gěng"), chinese_name: Some("桔梗") },
    StaticHerb { name: "Bei Mu", scientific_name: Some("Fritillaria cirrhosa"), common_names: &["Fritillaria", "Fritillary Bulb"], sanskrit_name: None, pinyin_name: Some("Bèi Mǔ"), chinese_name: Some("贝母") },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_table_names_unique_within_each_table() {
        for table in [WESTERN_HERBS, AYURVEDIC_HERBS, TCM_HERBS] {
            let mut seen = FxHashSet::default();
            for herb in table {
                assert!(seen.insert(herb.name), "duplicate entry {}", herb.name);
            }
        }
    }

    #[test]
    fn test_native_names_match_table() {
        assert!(WESTERN_HERBS.iter().all(|h| h.sanskrit_name.is_none() && h.pinyin_name.is_none()));
        assert!(AYURVEDIC_HERBS.iter().all(|h| h.sanskrit_name.is_some()));
        assert!(TCM_HERBS.iter().all(|h| h.pinyin_name.is_some() && h.chinese_name.is_some()));
    }
}
