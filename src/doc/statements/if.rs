/*!
# `IF <expression> THEN <line number>`
Also `IF <expression> THEN <statement>` and `IF <expression> GOTO <line number>`.

## Purpose
Run the rest of the line only when a condition holds.

## Remarks
A number is true when it is not zero. A string is converted
as `VAL` would convert it. When the condition is false the rest
of the line is skipped.

## Example
```text
10 FOR I=1 TO 4
20 IF I/2=INT(I/2) THEN PRINT I;"IS EVEN":GOTO 40
30 PRINT I;"IS ODD"
40 NEXT
RUN
1 IS ODD
2 IS EVEN
3 IS ODD
4 IS EVEN
```

*/
